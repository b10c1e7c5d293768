//! Interface strings in Indonesian, English and Japanese.
//!
//! Lookups fall back to English and then to the key itself, so a missing
//! translation shows up as readable English or as the raw key.

use jiniso_core::{Language, OrderStatus, TimelineEventKind};

/// Resolves interface strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    #[must_use]
    pub const fn new(lang: Language) -> Self {
        Self { lang }
    }

    #[must_use]
    pub const fn lang(&self) -> Language {
        self.lang
    }

    /// Translate `key`.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        lookup(self.lang, key)
            .or_else(|| english(key))
            .unwrap_or(key)
    }

    /// Translated label for an order status.
    #[must_use]
    pub fn status(&self, status: OrderStatus) -> &'static str {
        self.t(match status {
            OrderStatus::Processing => "status_processing",
            OrderStatus::Shipped => "status_shipped",
            OrderStatus::Delivered => "status_delivered",
        })
    }

    /// Translated verb for a timeline entry.
    #[must_use]
    pub fn timeline_action(&self, kind: TimelineEventKind) -> &'static str {
        self.t(match kind {
            TimelineEventKind::Viewed => "timeline_viewed",
            TimelineEventKind::Cart => "timeline_cart",
            TimelineEventKind::Reserved => "timeline_reserved",
            TimelineEventKind::Purchased => "timeline_purchased",
        })
    }
}

fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    match lang {
        Language::Indonesian => indonesian(key),
        Language::English => english(key),
        Language::Japanese => japanese(key),
    }
}

#[allow(clippy::too_many_lines)]
fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        // Layout
        "nav_home" => "Home",
        "nav_shop" => "Shop",
        "nav_men" => "Men",
        "nav_women" => "Women",
        "nav_accessories" => "Accessories",
        "nav_collections" => "Collections",
        "nav_stores" => "Stores",
        "nav_help" => "Help",
        "nav_cart" => "Cart",
        "nav_orders" => "Orders",
        "nav_account" => "Account",
        "nav_admin" => "Admin",
        "nav_login" => "Login",
        "nav_logout" => "Logout",
        "nav_chat" => "Concierge",
        "language" => "Language",
        "footer_tagline" => "Everyday essentials, made to last.",
        "footer_rights" => "All rights reserved.",
        // Home
        "hero_title" => "New Season Essentials",
        "hero_subtitle" => "Clean cuts and honest fabrics for every day of the week.",
        "shop_now" => "Shop Now",
        "featured_products" => "Featured Products",
        "shop_by_category" => "Shop by Category",
        "testimonials_title" => "What Our Customers Say",
        "view_all" => "View All",
        // Products
        "products_title" => "All Products",
        "filter_all" => "All",
        "filter_category" => "Category",
        "filter_type" => "Type",
        "search_placeholder" => "Search products...",
        "search" => "Search",
        "no_products" => "No products match your filters.",
        "add_to_cart" => "Add to Cart",
        "quantity" => "Quantity",
        "reserve_in_store" => "Reserve in Store",
        "reserve" => "Reserve",
        "stock_in_store" => "Store Availability",
        "in_stock" => "in stock",
        "out_of_stock" => "Out of stock",
        "product_not_found" => "Product not found",
        "back_to_shop" => "Back to Shop",
        "related_products" => "You May Also Like",
        "description" => "Description",
        "login_to_shop" => "Log in to add items to your cart or reserve them in store.",
        "added_to_cart" => "Added to your cart.",
        // Cart
        "cart_title" => "Shopping Cart",
        "cart_empty" => "Your cart is empty.",
        "continue_shopping" => "Continue Shopping",
        "remove" => "Remove",
        "subtotal" => "Subtotal",
        "shipping" => "Shipping",
        "free" => "Free",
        "total" => "Total",
        "checkout" => "Checkout",
        "items" => "Items",
        // Orders
        "orders_title" => "My Orders",
        "orders_empty" => "You have no orders yet.",
        "search_orders" => "Search by order ID or product",
        "order_id" => "Order ID",
        "order_date" => "Order Date",
        "status" => "Status",
        "status_processing" => "Processing",
        "status_shipped" => "Shipped",
        "status_delivered" => "Delivered",
        "view_details" => "View Details",
        "order_not_found" => "Order not found",
        "tracking_number" => "Tracking Number",
        "courier" => "Courier",
        "shipped_date" => "Shipped",
        "estimated_arrival" => "Estimated Arrival",
        "payment_method" => "Payment Method",
        "payment_timeline" => "Payment Status",
        "tracking_timeline" => "Shipment Tracking",
        "order_placed" => "Thank you! Your order has been placed.",
        "back_to_orders" => "Back to Orders",
        // Account
        "account_title" => "My Account",
        "profile" => "Profile",
        "email" => "Email",
        "phone" => "Phone",
        "visit_history" => "Visit History",
        "reservations" => "Reservations",
        "no_reservations" => "No reservations yet.",
        "journey_timeline" => "Your Journey",
        "timeline_empty" => "Nothing here yet. Start browsing!",
        "timeline_viewed" => "Viewed",
        "timeline_cart" => "Added to cart",
        "timeline_reserved" => "Reserved",
        "timeline_purchased" => "Purchased",
        "recently_viewed" => "Recently Viewed",
        "valid_until" => "Valid until",
        // Reservation
        "reservation_confirmed" => "Reservation Confirmed",
        "reservation_reference" => "Reservation Code",
        "reservation_note" => "Show this code at the counter. We hold the item for 24 hours.",
        "no_reservation" => "You have no active reservation.",
        "pickup_store" => "Pickup Store",
        // Stores
        "stores_title" => "Find a Store",
        "stores_subtitle" => "Try on, pick up your reservation, or just say hello.",
        "opening_hours" => "Open daily 10:00 - 22:00",
        // Help
        "help_title" => "Help Center",
        "faq_shipping_q" => "How long does shipping take?",
        "faq_shipping_a" => "Orders are packed within a day and usually arrive in 2 to 3 days.",
        "faq_returns_q" => "Can I return an item?",
        "faq_returns_a" => "Unworn items with tags can be returned within 14 days.",
        "faq_payment_q" => "Which payment methods are accepted?",
        "faq_payment_a" => "GoPay, OVO, bank virtual accounts and credit cards.",
        "faq_reservation_q" => "How do store reservations work?",
        "faq_reservation_a" => "Reserve online and pick up within 24 hours at the chosen store.",
        "contact_us" => "Still need help? Ask our concierge.",
        // Chat
        "chat_title" => "JINISO Concierge",
        "chat_status" => "Active Support",
        "chat_welcome" => "Hi! I am the JINISO concierge. How can I help you today?",
        "chat_placeholder" => "Type your message...",
        "chat_send" => "Send",
        "chat_track_order" => "Track my order",
        "chat_sizing_help" => "Size guide",
        "chat_store_info" => "Store info",
        "chat_human" => "Talk to a person",
        "chat_response_track" => {
            "You can follow every shipment step on the Orders page. Open an order to see its tracking timeline."
        }
        "chat_response_sizing" => {
            "Our tops run true to size. For an oversized look, go one size up."
        }
        "chat_response_store" => {
            "We have three stores: Central Mall, Metro Square and Urban Gallery. All open daily from 10:00."
        }
        "chat_response_human" => {
            "Thanks for your message. One of our team members will get back to you shortly."
        }
        // Login
        "login_title" => "Sign In",
        "username" => "Username",
        "password" => "Password",
        "login_button" => "Sign In",
        "login_error" => "Invalid username or password.",
        "login_required" => "Please log in to your account first.",
        "demo_hint" => "This is a demo store. Use the demo credentials provided to you.",
        // Admin
        "admin_dashboard" => "Admin Dashboard",
        "overview" => "Overview",
        "users" => "Users",
        "inventory" => "Inventory",
        "transactions" => "Transactions",
        "total_revenue" => "Total Revenue",
        "total_orders" => "Total Orders",
        "total_users" => "Total Users",
        "total_stock" => "Total Stock",
        "branch_performance" => "Branch Performance",
        "stock_flow" => "Stock Flow",
        "stock_in" => "In",
        "stock_out" => "Out",
        "monthly" => "Monthly",
        "quarterly" => "Quarterly",
        "yearly" => "Yearly",
        "user_management" => "User Management",
        "search_users" => "Search by name or email",
        "registered" => "Registered",
        "last_device" => "Last Device",
        "more_entries" => "more entries",
        "transaction_history" => "Transaction History",
        "customer" => "Customer",
        "top_selling_items" => "Top Selling Items",
        "history_log" => "History Log",
        "login_logs" => "Logins",
        "registration_logs" => "Registrations",
        "sales" => "Sales",
        "access_denied" => "Access Denied",
        "access_denied_body" => "This page is only available to administrators.",
        // Errors
        "not_found_title" => "Page not found",
        "not_found_body" => "The page you are looking for does not exist.",
        "back_home" => "Back to Home",
        _ => return None,
    })
}

#[allow(clippy::too_many_lines)]
fn indonesian(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav_home" => "Beranda",
        "nav_shop" => "Belanja",
        "nav_men" => "Pria",
        "nav_women" => "Wanita",
        "nav_accessories" => "Aksesoris",
        "nav_collections" => "Koleksi",
        "nav_stores" => "Toko",
        "nav_help" => "Bantuan",
        "nav_cart" => "Keranjang",
        "nav_orders" => "Pesanan",
        "nav_account" => "Akun",
        "nav_admin" => "Admin",
        "nav_login" => "Masuk",
        "nav_logout" => "Keluar",
        "nav_chat" => "Layanan",
        "language" => "Bahasa",
        "footer_tagline" => "Pakaian sehari-hari yang awet.",
        "footer_rights" => "Hak cipta dilindungi.",
        "hero_title" => "Koleksi Musim Baru",
        "hero_subtitle" => "Potongan rapi dan bahan jujur untuk setiap hari.",
        "shop_now" => "Belanja Sekarang",
        "featured_products" => "Produk Unggulan",
        "shop_by_category" => "Belanja per Kategori",
        "testimonials_title" => "Kata Pelanggan Kami",
        "view_all" => "Lihat Semua",
        "products_title" => "Semua Produk",
        "filter_all" => "Semua",
        "filter_category" => "Kategori",
        "filter_type" => "Jenis",
        "search_placeholder" => "Cari produk...",
        "search" => "Cari",
        "no_products" => "Tidak ada produk yang cocok.",
        "add_to_cart" => "Tambah ke Keranjang",
        "quantity" => "Jumlah",
        "reserve_in_store" => "Pesan di Toko",
        "reserve" => "Pesan",
        "stock_in_store" => "Ketersediaan Toko",
        "in_stock" => "tersedia",
        "out_of_stock" => "Stok habis",
        "product_not_found" => "Produk tidak ditemukan",
        "back_to_shop" => "Kembali Belanja",
        "related_products" => "Mungkin Anda Suka",
        "description" => "Deskripsi",
        "login_to_shop" => "Masuk untuk menambah ke keranjang atau memesan di toko.",
        "added_to_cart" => "Ditambahkan ke keranjang.",
        "cart_title" => "Keranjang Belanja",
        "cart_empty" => "Keranjang Anda kosong.",
        "continue_shopping" => "Lanjut Belanja",
        "remove" => "Hapus",
        "subtotal" => "Subtotal",
        "shipping" => "Pengiriman",
        "free" => "Gratis",
        "total" => "Total",
        "checkout" => "Bayar",
        "items" => "Barang",
        "orders_title" => "Pesanan Saya",
        "orders_empty" => "Anda belum memiliki pesanan.",
        "search_orders" => "Cari ID pesanan atau produk",
        "order_id" => "ID Pesanan",
        "order_date" => "Tanggal Pesanan",
        "status" => "Status",
        "status_processing" => "Diproses",
        "status_shipped" => "Dikirim",
        "status_delivered" => "Terkirim",
        "view_details" => "Lihat Detail",
        "order_not_found" => "Pesanan tidak ditemukan",
        "tracking_number" => "Nomor Resi",
        "courier" => "Kurir",
        "shipped_date" => "Dikirim",
        "estimated_arrival" => "Perkiraan Tiba",
        "payment_method" => "Metode Pembayaran",
        "payment_timeline" => "Status Pembayaran",
        "tracking_timeline" => "Lacak Pengiriman",
        "order_placed" => "Terima kasih! Pesanan Anda telah dibuat.",
        "back_to_orders" => "Kembali ke Pesanan",
        "account_title" => "Akun Saya",
        "profile" => "Profil",
        "email" => "Email",
        "phone" => "Telepon",
        "visit_history" => "Riwayat Kunjungan",
        "reservations" => "Reservasi",
        "no_reservations" => "Belum ada reservasi.",
        "journey_timeline" => "Perjalanan Anda",
        "timeline_empty" => "Belum ada aktivitas. Mulai jelajahi!",
        "timeline_viewed" => "Dilihat",
        "timeline_cart" => "Ditambah ke keranjang",
        "timeline_reserved" => "Dipesan",
        "timeline_purchased" => "Dibeli",
        "recently_viewed" => "Terakhir Dilihat",
        "valid_until" => "Berlaku hingga",
        "reservation_confirmed" => "Reservasi Berhasil",
        "reservation_reference" => "Kode Reservasi",
        "reservation_note" => "Tunjukkan kode ini di kasir. Barang kami simpan selama 24 jam.",
        "no_reservation" => "Anda tidak memiliki reservasi aktif.",
        "pickup_store" => "Toko Pengambilan",
        "stores_title" => "Temukan Toko",
        "stores_subtitle" => "Coba langsung, ambil reservasi, atau sekadar mampir.",
        "opening_hours" => "Buka setiap hari 10:00 - 22:00",
        "help_title" => "Pusat Bantuan",
        "faq_shipping_q" => "Berapa lama pengiriman?",
        "faq_shipping_a" => "Pesanan dikemas dalam sehari dan biasanya tiba dalam 2 sampai 3 hari.",
        "faq_returns_q" => "Bisakah saya mengembalikan barang?",
        "faq_returns_a" => "Barang yang belum dipakai dan berlabel dapat dikembalikan dalam 14 hari.",
        "faq_payment_q" => "Metode pembayaran apa yang diterima?",
        "faq_payment_a" => "GoPay, OVO, virtual account bank dan kartu kredit.",
        "faq_reservation_q" => "Bagaimana cara kerja reservasi toko?",
        "faq_reservation_a" => "Pesan online lalu ambil dalam 24 jam di toko pilihan.",
        "contact_us" => "Masih butuh bantuan? Tanyakan layanan kami.",
        "chat_title" => "JINISO Concierge",
        "chat_status" => "Layanan Aktif",
        "chat_welcome" => "Halo! Saya concierge JINISO. Ada yang bisa saya bantu?",
        "chat_placeholder" => "Ketik pesan...",
        "chat_send" => "Kirim",
        "chat_track_order" => "Lacak pesanan saya",
        "chat_sizing_help" => "Panduan ukuran",
        "chat_store_info" => "Info toko",
        "chat_human" => "Bicara dengan staf",
        "chat_response_track" => {
            "Anda dapat melihat setiap tahap pengiriman di halaman Pesanan. Buka pesanan untuk melihat riwayat pelacakan."
        }
        "chat_response_sizing" => {
            "Atasan kami sesuai ukuran standar. Untuk tampilan oversized, pilih satu ukuran lebih besar."
        }
        "chat_response_store" => {
            "Kami punya tiga toko: Central Mall, Metro Square dan Urban Gallery. Semua buka setiap hari mulai 10:00."
        }
        "chat_response_human" => {
            "Terima kasih atas pesan Anda. Tim kami akan segera menghubungi Anda."
        }
        "login_title" => "Masuk",
        "username" => "Nama Pengguna",
        "password" => "Kata Sandi",
        "login_button" => "Masuk",
        "login_error" => "Nama pengguna atau kata sandi salah.",
        "login_required" => "Silakan masuk ke akun Anda terlebih dahulu.",
        "demo_hint" => "Ini adalah toko demo. Gunakan kredensial demo yang diberikan.",
        "admin_dashboard" => "Dasbor Admin",
        "overview" => "Ringkasan",
        "users" => "Pengguna",
        "inventory" => "Inventaris",
        "transactions" => "Transaksi",
        "total_revenue" => "Total Pendapatan",
        "total_orders" => "Total Pesanan",
        "total_users" => "Total Pengguna",
        "total_stock" => "Total Stok",
        "branch_performance" => "Performa Cabang",
        "stock_flow" => "Arus Stok",
        "stock_in" => "Masuk",
        "stock_out" => "Keluar",
        "monthly" => "Bulanan",
        "quarterly" => "Kuartalan",
        "yearly" => "Tahunan",
        "user_management" => "Manajemen Pengguna",
        "search_users" => "Cari nama atau email",
        "registered" => "Terdaftar",
        "last_device" => "Perangkat Terakhir",
        "more_entries" => "entri lainnya",
        "transaction_history" => "Riwayat Transaksi",
        "customer" => "Pelanggan",
        "top_selling_items" => "Produk Terlaris",
        "history_log" => "Log Riwayat",
        "login_logs" => "Login",
        "registration_logs" => "Pendaftaran",
        "sales" => "Penjualan",
        "access_denied" => "Akses Ditolak",
        "access_denied_body" => "Halaman ini hanya untuk administrator.",
        "not_found_title" => "Halaman tidak ditemukan",
        "not_found_body" => "Halaman yang Anda cari tidak ada.",
        "back_home" => "Kembali ke Beranda",
        _ => return None,
    })
}

#[allow(clippy::too_many_lines)]
fn japanese(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav_home" => "ホーム",
        "nav_shop" => "ショップ",
        "nav_men" => "メンズ",
        "nav_women" => "ウィメンズ",
        "nav_accessories" => "アクセサリー",
        "nav_collections" => "コレクション",
        "nav_stores" => "店舗",
        "nav_help" => "ヘルプ",
        "nav_cart" => "カート",
        "nav_orders" => "注文履歴",
        "nav_account" => "アカウント",
        "nav_admin" => "管理",
        "nav_login" => "ログイン",
        "nav_logout" => "ログアウト",
        "nav_chat" => "コンシェルジュ",
        "language" => "言語",
        "hero_title" => "新シーズンの定番",
        "shop_now" => "今すぐ購入",
        "featured_products" => "おすすめ商品",
        "shop_by_category" => "カテゴリーから探す",
        "testimonials_title" => "お客様の声",
        "view_all" => "すべて見る",
        "products_title" => "すべての商品",
        "filter_all" => "すべて",
        "filter_category" => "カテゴリー",
        "filter_type" => "タイプ",
        "search_placeholder" => "商品を検索...",
        "search" => "検索",
        "no_products" => "条件に合う商品がありません。",
        "add_to_cart" => "カートに追加",
        "quantity" => "数量",
        "reserve_in_store" => "店舗で取り置き",
        "reserve" => "取り置き",
        "stock_in_store" => "店舗在庫",
        "in_stock" => "在庫あり",
        "out_of_stock" => "在庫切れ",
        "product_not_found" => "商品が見つかりません",
        "back_to_shop" => "ショップに戻る",
        "related_products" => "こちらもおすすめ",
        "description" => "商品説明",
        "added_to_cart" => "カートに追加しました。",
        "cart_title" => "ショッピングカート",
        "cart_empty" => "カートは空です。",
        "continue_shopping" => "買い物を続ける",
        "remove" => "削除",
        "subtotal" => "小計",
        "shipping" => "送料",
        "free" => "無料",
        "total" => "合計",
        "checkout" => "購入手続き",
        "items" => "商品",
        "orders_title" => "注文履歴",
        "orders_empty" => "注文はまだありません。",
        "search_orders" => "注文IDまたは商品名で検索",
        "order_id" => "注文ID",
        "order_date" => "注文日",
        "status" => "ステータス",
        "status_processing" => "処理中",
        "status_shipped" => "発送済み",
        "status_delivered" => "配達済み",
        "view_details" => "詳細を見る",
        "order_not_found" => "注文が見つかりません",
        "tracking_number" => "追跡番号",
        "courier" => "配送業者",
        "shipped_date" => "発送日",
        "estimated_arrival" => "お届け予定",
        "payment_method" => "支払い方法",
        "payment_timeline" => "支払い状況",
        "tracking_timeline" => "配送追跡",
        "order_placed" => "ご注文ありがとうございます。",
        "back_to_orders" => "注文履歴に戻る",
        "account_title" => "マイアカウント",
        "profile" => "プロフィール",
        "email" => "メール",
        "phone" => "電話番号",
        "visit_history" => "訪問履歴",
        "reservations" => "取り置き",
        "no_reservations" => "取り置きはありません。",
        "journey_timeline" => "あなたの履歴",
        "timeline_viewed" => "閲覧",
        "timeline_cart" => "カートに追加",
        "timeline_reserved" => "取り置き",
        "timeline_purchased" => "購入",
        "recently_viewed" => "最近見た商品",
        "valid_until" => "有効期限",
        "reservation_confirmed" => "取り置きが完了しました",
        "reservation_reference" => "取り置きコード",
        "reservation_note" => "レジでこのコードをご提示ください。商品は24時間お取り置きします。",
        "pickup_store" => "受け取り店舗",
        "stores_title" => "店舗を探す",
        "opening_hours" => "毎日 10:00 - 22:00 営業",
        "help_title" => "ヘルプセンター",
        "chat_title" => "JINISO コンシェルジュ",
        "chat_welcome" => "こんにちは！JINISOコンシェルジュです。ご用件をどうぞ。",
        "chat_placeholder" => "メッセージを入力...",
        "chat_send" => "送信",
        "chat_track_order" => "注文を追跡",
        "chat_sizing_help" => "サイズガイド",
        "chat_store_info" => "店舗情報",
        "chat_human" => "スタッフと話す",
        "chat_response_track" => "注文履歴ページで配送の各ステップを確認できます。",
        "chat_response_sizing" => "トップスは標準サイズです。ゆったり着たい場合はワンサイズ上をお選びください。",
        "chat_response_store" => "セントラルモール、メトロスクエア、アーバンギャラリーの3店舗があります。",
        "chat_response_human" => "メッセージありがとうございます。担当者よりご連絡いたします。",
        "login_title" => "ログイン",
        "username" => "ユーザー名",
        "password" => "パスワード",
        "login_button" => "ログイン",
        "login_error" => "ユーザー名またはパスワードが正しくありません。",
        "login_required" => "先にアカウントにログインしてください。",
        "admin_dashboard" => "管理ダッシュボード",
        "overview" => "概要",
        "users" => "ユーザー",
        "inventory" => "在庫",
        "transactions" => "取引",
        "total_revenue" => "総売上",
        "total_orders" => "総注文数",
        "total_users" => "総ユーザー数",
        "total_stock" => "総在庫",
        "monthly" => "月次",
        "quarterly" => "四半期",
        "yearly" => "年次",
        "access_denied" => "アクセスが拒否されました",
        "not_found_title" => "ページが見つかりません",
        "back_home" => "ホームに戻る",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_per_language() {
        assert_eq!(Translator::new(Language::Indonesian).t("nav_cart"), "Keranjang");
        assert_eq!(Translator::new(Language::English).t("nav_cart"), "Cart");
        assert_eq!(Translator::new(Language::Japanese).t("nav_cart"), "カート");
    }

    #[test]
    fn test_falls_back_to_english_then_key() {
        let jp = Translator::new(Language::Japanese);
        assert_eq!(jp.t("faq_returns_q"), "Can I return an item?");
        assert_eq!(jp.t("no_such_key"), "no_such_key");
    }

    #[test]
    fn test_default_is_indonesian() {
        assert_eq!(Translator::default().t("nav_login"), "Masuk");
    }

    #[test]
    fn test_status_and_timeline_labels() {
        let en = Translator::new(Language::English);
        assert_eq!(en.status(OrderStatus::Shipped), "Shipped");
        assert_eq!(
            en.timeline_action(TimelineEventKind::Cart),
            "Added to cart"
        );
    }

    #[test]
    fn test_every_indonesian_key_has_english() {
        for key in ["chat_welcome", "login_required", "access_denied_body", "opening_hours"] {
            assert!(indonesian(key).is_some());
            assert!(english(key).is_some());
        }
    }
}
