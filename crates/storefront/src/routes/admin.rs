//! Admin dashboard route handler.
//!
//! Figures are fabricated on every request; nothing the admin sees is
//! persisted. Non-admin visitors get a 403 access-denied page.

use std::str::FromStr;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::Catalog;
use crate::filters;
use crate::i18n::Translator;
use crate::middleware::Shopper;
use crate::page::PageContext;
use crate::services::dashboard::{
    AccountRecord, ChartPeriod, Dashboard, FlowPoint, LOG_LIMIT, LogKind, TRANSACTION_LIMIT,
    USER_TABLE_LIMIT,
};
use crate::state::AppState;

/// Dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Users,
    Inventory,
    Transactions,
}

impl AdminTab {
    pub const ALL: [Self; 4] = [
        Self::Overview,
        Self::Users,
        Self::Inventory,
        Self::Transactions,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Users => "users",
            Self::Inventory => "inventory",
            Self::Transactions => "transactions",
        }
    }

    fn parse(value: Option<&str>) -> Self {
        value
            .and_then(|v| Self::ALL.into_iter().find(|t| t.as_str() == v))
            .unwrap_or_default()
    }
}

/// Dashboard query parameters. Unknown values fall back to defaults.
#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub tab: Option<String>,
    pub q: Option<String>,
    pub period: Option<String>,
    pub logs: Option<String>,
}

/// A link in one of the dashboard's switchers.
#[derive(Clone)]
pub struct SwitchOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Headline figures.
#[derive(Clone)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

/// Per-store row of the branch performance table.
#[derive(Clone)]
pub struct BranchView {
    pub name: String,
    pub location: String,
    pub stock: u64,
    pub stock_share: u64,
    pub sales: String,
    pub order_count: u64,
}

/// One bar pair of the stock-flow chart, heights in percent of the tallest bar.
#[derive(Clone)]
pub struct ChartBar {
    pub label: &'static str,
    pub stock_in: u64,
    pub stock_out: u64,
    pub in_height: u64,
    pub out_height: u64,
}

/// History log row.
#[derive(Clone)]
pub struct LogView {
    pub user_name: String,
    pub at: String,
}

/// User management row.
#[derive(Clone)]
pub struct AccountView {
    pub initials: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub registered: String,
    pub last_platform: String,
    pub order_count: usize,
}

impl From<&AccountRecord> for AccountView {
    fn from(account: &AccountRecord) -> Self {
        Self {
            initials: account.initials(),
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role.to_string(),
            registered: account.registered_at.format("%d %b %Y").to_string(),
            last_platform: account.last_platform().to_string(),
            order_count: account.orders.len(),
        }
    }
}

/// Inventory row: stock of one product at every store.
#[derive(Clone)]
pub struct InventoryRow {
    pub id: String,
    pub name: String,
    pub category: &'static str,
    pub per_store: Vec<u32>,
    pub total: u32,
}

/// Transaction table row.
#[derive(Clone)]
pub struct TransactionView {
    pub id: String,
    pub customer: String,
    pub date: String,
    pub status: &'static str,
    pub total: String,
}

/// Best-seller tile.
#[derive(Clone)]
pub struct TopSellerView {
    pub name: String,
    pub image: String,
    pub price: String,
}

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub page: PageContext,
    pub tab: &'static str,
    pub tabs: Vec<SwitchOption>,
    pub stats: Vec<StatCard>,
    pub branches: Vec<BranchView>,
    pub period: &'static str,
    pub periods: Vec<SwitchOption>,
    pub chart: Vec<ChartBar>,
    pub log_kind: &'static str,
    pub log_kinds: Vec<SwitchOption>,
    pub logs: Vec<LogView>,
    pub top_selling: Vec<TopSellerView>,
    pub query: String,
    pub accounts: Vec<AccountView>,
    pub hidden_accounts: usize,
    pub store_names: Vec<String>,
    pub inventory: Vec<InventoryRow>,
    pub transactions: Vec<TransactionView>,
}

/// Access denied template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/access_denied.html")]
pub struct AccessDeniedTemplate {
    pub page: PageContext,
}

/// Parse a query value, falling back to the default for missing or unknown input.
fn parse_or_default<T: FromStr + Default>(value: Option<&str>) -> T {
    value.and_then(|v| v.parse::<T>().ok()).unwrap_or_default()
}

/// Scale a series to bar heights, tallest bar at 100.
fn chart_bars(series: &[FlowPoint]) -> Vec<ChartBar> {
    let max = series
        .iter()
        .map(|p| p.stock_in.max(p.stock_out))
        .max()
        .unwrap_or(0)
        .max(1);

    series
        .iter()
        .map(|p| ChartBar {
            label: p.label,
            stock_in: p.stock_in,
            stock_out: p.stock_out,
            in_height: p.stock_in * 100 / max,
            out_height: p.stock_out * 100 / max,
        })
        .collect()
}

fn inventory_rows(catalog: &Catalog) -> Vec<InventoryRow> {
    catalog
        .products()
        .iter()
        .map(|product| InventoryRow {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.as_str(),
            per_store: catalog
                .stores()
                .iter()
                .map(|store| product.stock_at(&store.id))
                .collect(),
            total: product.total_stock(),
        })
        .collect()
}

fn switcher<T: Copy + PartialEq>(
    options: &[T],
    current: T,
    value: impl Fn(T) -> &'static str,
    label_key: impl Fn(T) -> &'static str,
    t: Translator,
) -> Vec<SwitchOption> {
    options
        .iter()
        .map(|&option| SwitchOption {
            value: value(option),
            label: t.t(label_key(option)),
            selected: option == current,
        })
        .collect()
}

const fn log_label_key(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Login => "login_logs",
        LogKind::Registration => "registration_logs",
    }
}

/// Display the admin dashboard.
#[instrument(skip_all, fields(tab = query.tab.as_deref().unwrap_or("overview")))]
pub async fn dashboard(
    State(state): State<AppState>,
    shopper: Shopper,
    Query(query): Query<AdminQuery>,
) -> Response {
    let page = shopper.page();
    if !page.is_admin {
        tracing::warn!(logged_in = page.logged_in, "Admin dashboard access denied");
        return (StatusCode::FORBIDDEN, AccessDeniedTemplate { page }).into_response();
    }

    let catalog = state.catalog();
    let dashboard = {
        let mut rng = rand::rng();
        Dashboard::fabricate(catalog, Utc::now(), &mut rng)
    };

    let t = page.translator();
    let tab = AdminTab::parse(query.tab.as_deref());
    let period: ChartPeriod = parse_or_default(query.period.as_deref());
    let log_kind: LogKind = parse_or_default(query.logs.as_deref());
    let search = query.q.unwrap_or_default();

    let matching = dashboard.search_accounts(&search);
    let hidden_accounts = matching.len().saturating_sub(USER_TABLE_LIMIT);

    DashboardTemplate {
        tab: tab.as_str(),
        tabs: switcher(&AdminTab::ALL, tab, |x| x.as_str(), |x| x.as_str(), t),
        stats: vec![
            StatCard {
                label: t.t("total_revenue"),
                value: dashboard.total_revenue.display(),
            },
            StatCard {
                label: t.t("total_orders"),
                value: dashboard.display_order_count.to_string(),
            },
            StatCard {
                label: t.t("total_users"),
                value: dashboard.accounts.len().to_string(),
            },
            StatCard {
                label: t.t("total_stock"),
                value: dashboard.total_stock().to_string(),
            },
        ],
        branches: dashboard
            .branches
            .iter()
            .map(|b| BranchView {
                name: b.store.name.clone(),
                location: b.store.location.clone(),
                stock: b.stock,
                stock_share: b.stock_share(dashboard.total_stock()),
                sales: b.sales.display(),
                order_count: b.order_count,
            })
            .collect(),
        period: period.as_str(),
        periods: switcher(&ChartPeriod::ALL, period, |p| p.as_str(), |p| p.as_str(), t),
        chart: chart_bars(dashboard.charts.series(period)),
        log_kind: log_kind.as_str(),
        log_kinds: switcher(
            &[LogKind::Login, LogKind::Registration],
            log_kind,
            |k| k.as_str(),
            log_label_key,
            t,
        ),
        logs: dashboard
            .logs(log_kind, LOG_LIMIT)
            .iter()
            .map(|entry| LogView {
                user_name: entry.user_name.clone(),
                at: entry.at.format("%d %b %Y, %H:%M").to_string(),
            })
            .collect(),
        top_selling: dashboard
            .top_selling(catalog)
            .iter()
            .map(|p| TopSellerView {
                name: p.name.clone(),
                image: p.image.clone(),
                price: p.price.display(),
            })
            .collect(),
        accounts: matching
            .into_iter()
            .take(USER_TABLE_LIMIT)
            .map(AccountView::from)
            .collect(),
        hidden_accounts,
        query: search,
        store_names: catalog.stores().iter().map(|s| s.name.clone()).collect(),
        inventory: if tab == AdminTab::Inventory {
            inventory_rows(catalog)
        } else {
            Vec::new()
        },
        transactions: dashboard
            .orders
            .iter()
            .take(TRANSACTION_LIMIT)
            .map(|row| TransactionView {
                id: row.order.id.to_string(),
                customer: row.user_name.clone(),
                date: row.order.placed_at.format("%d %b %Y").to_string(),
                status: t.status(row.order.status),
                total: row.order.total().display(),
            })
            .collect(),
        page,
    }
    .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use jiniso_core::Language;

    use super::*;

    #[test]
    fn test_tab_parsing_falls_back_to_overview() {
        assert_eq!(AdminTab::parse(Some("users")), AdminTab::Users);
        assert_eq!(AdminTab::parse(Some("transactions")), AdminTab::Transactions);
        assert_eq!(AdminTab::parse(Some("billing")), AdminTab::Overview);
        assert_eq!(AdminTab::parse(None), AdminTab::Overview);
    }

    #[test]
    fn test_query_values_parse_with_fallback() {
        assert_eq!(parse_or_default::<ChartPeriod>(Some("yearly")), ChartPeriod::Yearly);
        assert_eq!(parse_or_default::<ChartPeriod>(Some("Quarterly")), ChartPeriod::Quarterly);
        assert_eq!(parse_or_default::<ChartPeriod>(Some("weekly")), ChartPeriod::Monthly);
        assert_eq!(parse_or_default::<ChartPeriod>(None), ChartPeriod::Monthly);
        assert_eq!(parse_or_default::<LogKind>(Some("registration")), LogKind::Registration);
        assert_eq!(parse_or_default::<LogKind>(Some("audit")), LogKind::Login);
    }

    #[test]
    fn test_chart_bars_scale_to_tallest() {
        let series = [
            FlowPoint {
                label: "Jan",
                stock_in: 200,
                stock_out: 150,
            },
            FlowPoint {
                label: "Feb",
                stock_in: 100,
                stock_out: 50,
            },
        ];
        let bars = chart_bars(&series);
        assert_eq!(bars[0].in_height, 100);
        assert_eq!(bars[0].out_height, 75);
        assert_eq!(bars[1].in_height, 50);
        assert_eq!(bars[1].out_height, 25);
        assert!(chart_bars(&[]).is_empty());
    }

    #[test]
    fn test_inventory_rows_cover_every_store() {
        let catalog = Catalog::generate(6, &mut StdRng::seed_from_u64(8));
        let rows = inventory_rows(&catalog);

        assert_eq!(rows.len(), catalog.products().len());
        for row in &rows {
            assert_eq!(row.per_store.len(), catalog.stores().len());
            assert_eq!(row.per_store.iter().sum::<u32>(), row.total);
        }
    }

    #[test]
    fn test_switcher_marks_current_option() {
        let options = switcher(
            &ChartPeriod::ALL,
            ChartPeriod::Quarterly,
            |p| p.as_str(),
            |p| p.as_str(),
            Translator::new(Language::English),
        );
        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, "quarterly");
        assert_eq!(selected[0].label, "Quarterly");
    }
}
