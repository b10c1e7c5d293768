//! Admin dashboard figures.
//!
//! Everything on the dashboard is fabricated per request: the two seeded
//! accounts are padded with random shoppers and the totals are scaled up so
//! the charts look like a busy store.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;

use jiniso_core::{ParseVariantError, Price, UserRole};

use crate::catalog::Catalog;
use crate::fixtures;
use crate::models::{Order, Product, Store};

/// Random shoppers added to the seeded accounts.
pub const EXTRA_ACCOUNTS: usize = 48;

/// Rows shown in the user table.
pub const USER_TABLE_LIMIT: usize = 12;

/// Rows shown in the transaction table.
pub const TRANSACTION_LIMIT: usize = 10;

/// Entries shown in the history log widget.
pub const LOG_LIMIT: usize = 10;

const ORDER_COUNT_MULTIPLIER: u64 = 124;
const ORDER_COUNT_FLOOR: u64 = 1_240;
const REVENUE_MULTIPLIER: u32 = 85;
const REVENUE_FLOOR_BASE: i64 = 15_000_000;

/// Registrations are spread over roughly the last 115 days.
const REGISTRATION_WINDOW_SECS: i64 = 10_000_000;
/// Last logins are spread over roughly the last 6 days.
const LOGIN_WINDOW_SECS: i64 = 500_000;

const NAMES: [&str; 20] = [
    "Ahmad", "Budi", "Citra", "Dewi", "Eko", "Fani", "Gani", "Hana", "Indra", "Joni", "Kiki",
    "Lulu", "Maya", "Nico", "Oki", "Putri", "Rian", "Sari", "Tono", "Uli",
];
const EMAIL_DOMAINS: [&str; 4] = ["gmail.com", "yahoo.com", "outlook.com", "hotstyle.id"];
const DEVICES: [&str; 2] = ["Windows / Chrome", "iPhone / Safari"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const QUARTERS: [&str; 4] = ["2025-Q1", "2025-Q2", "2025-Q3", "2025-Q4"];
const YEARS: [&str; 4] = ["2023", "2024", "2025", "2026"];

/// One sign-in recorded against an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginLog {
    pub at: DateTime<Utc>,
    pub device: String,
    pub ip: String,
}

/// An account as listed in the user management table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub registered_at: DateTime<Utc>,
    /// Most recent first.
    pub login_logs: Vec<LoginLog>,
    pub orders: Vec<Order>,
}

impl AccountRecord {
    /// Initials for the avatar bubble, e.g. `DC` for "Dini Cahyo".
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// Platform of the most recent login, e.g. "iPhone".
    #[must_use]
    pub fn last_platform(&self) -> &str {
        self.login_logs
            .first()
            .and_then(|log| log.device.split('/').next())
            .map_or("N/A", str::trim)
    }
}

/// An order together with the account that placed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub order: Order,
    pub user_id: String,
    pub user_name: String,
}

/// Per-store performance.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchStat {
    pub store: Store,
    /// Units on hand across the catalog.
    pub stock: u64,
    pub sales: Price,
    pub order_count: u64,
    /// Share of traffic attributed to this store, in `[0.25, 0.75)`.
    pub weight: f64,
}

impl BranchStat {
    /// Share of all stock held by this store, as a whole percentage.
    #[must_use]
    pub fn stock_share(&self, total_stock: u64) -> u64 {
        if total_stock == 0 {
            0
        } else {
            self.stock * 100 / total_stock
        }
    }
}

/// Stock movement for one chart bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowPoint {
    pub label: &'static str,
    pub stock_in: u64,
    pub stock_out: u64,
}

/// Granularity of the stock-flow chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartPeriod {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl ChartPeriod {
    pub const ALL: [Self; 3] = [Self::Monthly, Self::Quarterly, Self::Yearly];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartPeriod {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseVariantError {
                kind: "chart period",
                value: s.to_owned(),
            })
    }
}

/// Stock-flow series for every period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockFlowCharts {
    pub monthly: Vec<FlowPoint>,
    pub quarterly: Vec<FlowPoint>,
    pub yearly: Vec<FlowPoint>,
}

impl StockFlowCharts {
    /// Series for one period.
    #[must_use]
    pub fn series(&self, period: ChartPeriod) -> &[FlowPoint] {
        match period {
            ChartPeriod::Monthly => &self.monthly,
            ChartPeriod::Quarterly => &self.quarterly,
            ChartPeriod::Yearly => &self.yearly,
        }
    }
}

/// Which history the log widget shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogKind {
    #[default]
    Login,
    Registration,
}

impl LogKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Registration => "registration",
        }
    }
}

impl FromStr for LogKind {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Login, Self::Registration]
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseVariantError {
                kind: "log kind",
                value: s.to_owned(),
            })
    }
}

/// An entry of the history log widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub user_name: String,
    pub at: DateTime<Utc>,
    pub kind: LogKind,
}

/// All figures behind one render of the admin dashboard.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub accounts: Vec<AccountRecord>,
    /// Newest first.
    pub orders: Vec<OrderRow>,
    pub display_order_count: u64,
    pub total_revenue: Price,
    pub branches: Vec<BranchStat>,
    pub charts: StockFlowCharts,
    login_logs: Vec<LogEntry>,
    registration_logs: Vec<LogEntry>,
}

impl Dashboard {
    /// Fabricate a fresh set of figures.
    pub fn fabricate<R: Rng + ?Sized>(catalog: &Catalog, now: DateTime<Utc>, rng: &mut R) -> Self {
        let mut accounts = fixtures::seeded_accounts(rng);
        accounts.extend((0..EXTRA_ACCOUNTS).map(|i| random_account(i, now, rng)));

        let mut orders: Vec<OrderRow> = accounts
            .iter()
            .flat_map(|account| {
                account.orders.iter().map(|order| OrderRow {
                    order: order.clone(),
                    user_id: account.id.clone(),
                    user_name: account.name.clone(),
                })
            })
            .collect();
        orders.sort_by(|a, b| b.order.placed_at.cmp(&a.order.placed_at));

        let display_order_count = if orders.is_empty() {
            ORDER_COUNT_FLOOR
        } else {
            orders.len() as u64 * ORDER_COUNT_MULTIPLIER
        };

        let base_revenue: Price = orders.iter().map(|row| row.order.subtotal()).sum();
        let base_revenue = if base_revenue.is_zero() {
            Price::idr(REVENUE_FLOOR_BASE)
        } else {
            base_revenue
        };
        let total_revenue = base_revenue.times(REVENUE_MULTIPLIER);

        let branches = branch_stats(catalog, total_revenue, display_order_count, rng);
        let charts = stock_flow_charts(rng);
        let (login_logs, registration_logs) = history_logs(&accounts);

        tracing::debug!(
            accounts = accounts.len(),
            orders = orders.len(),
            "dashboard fabricated"
        );

        Self {
            accounts,
            orders,
            display_order_count,
            total_revenue,
            branches,
            charts,
            login_logs,
            registration_logs,
        }
    }

    /// Accounts whose name or email contains `query`, case-insensitively.
    #[must_use]
    pub fn search_accounts(&self, query: &str) -> Vec<&AccountRecord> {
        let query = query.trim().to_lowercase();
        self.accounts
            .iter()
            .filter(|a| {
                a.name.to_lowercase().contains(&query) || a.email.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Newest log entries of one kind, at most `limit`.
    #[must_use]
    pub fn logs(&self, kind: LogKind, limit: usize) -> &[LogEntry] {
        let logs = match kind {
            LogKind::Login => &self.login_logs,
            LogKind::Registration => &self.registration_logs,
        };
        logs.get(..limit).unwrap_or(logs)
    }

    /// Units on hand across every store.
    #[must_use]
    pub fn total_stock(&self) -> u64 {
        self.branches.iter().map(|b| b.stock).sum()
    }

    /// Products highlighted as best sellers.
    #[must_use]
    pub fn top_selling<'a>(&self, catalog: &'a Catalog) -> &'a [Product] {
        let products = catalog.products();
        products.get(..3).unwrap_or(products)
    }
}

fn random_account<R: Rng + ?Sized>(index: usize, now: DateTime<Utc>, rng: &mut R) -> AccountRecord {
    let first = NAMES.choose(rng).copied().unwrap_or_default();
    let last = NAMES.choose(rng).copied().unwrap_or_default();
    let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or_default();
    let suffix: u8 = rng.random_range(0..100);

    AccountRecord {
        id: format!("user-extra-{index}"),
        name: format!("{first} {last}"),
        email: format!(
            "{}.{}{suffix}@{domain}",
            first.to_lowercase(),
            last.to_lowercase()
        ),
        role: UserRole::Customer,
        registered_at: now - Duration::seconds(rng.random_range(0..REGISTRATION_WINDOW_SECS)),
        login_logs: vec![LoginLog {
            at: now - Duration::seconds(rng.random_range(0..LOGIN_WINDOW_SECS)),
            device: DEVICES.choose(rng).copied().unwrap_or_default().to_string(),
            ip: format!("192.168.1.{}", rng.random_range(0..255_u8)),
        }],
        orders: Vec::new(),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn branch_stats<R: Rng + ?Sized>(
    catalog: &Catalog,
    total_revenue: Price,
    display_order_count: u64,
    rng: &mut R,
) -> Vec<BranchStat> {
    let store_count = catalog.stores().len().max(1) as f64;

    catalog
        .stores()
        .iter()
        .map(|store| {
            let weight = rng.random_range(0.25..0.75);
            let share = weight / store_count;
            BranchStat {
                store: store.clone(),
                stock: catalog.stock_at_store(&store.id),
                sales: total_revenue.scaled_down(share),
                order_count: (display_order_count as f64 * share).floor() as u64,
                weight,
            }
        })
        .collect()
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn flow_point(label: &'static str, stock_in: f64, out_ratio: f64) -> FlowPoint {
    let stock_in = stock_in.floor() as u64;
    FlowPoint {
        label,
        stock_in,
        stock_out: (stock_in as f64 * out_ratio).floor() as u64,
    }
}

fn stock_flow_charts<R: Rng + ?Sized>(rng: &mut R) -> StockFlowCharts {
    let monthly = MONTHS
        .iter()
        .enumerate()
        .map(|(idx, &label)| {
            let seasonal = match idx {
                10 | 11 => 1.8,
                0 | 1 => 1.4,
                _ => 1.0,
            };
            let stock_in = rng.random_range(4_000.0..14_000.0) * seasonal;
            let ratio = rng.random_range(0.55..0.95);
            flow_point(label, stock_in, ratio)
        })
        .collect();

    let quarterly = QUARTERS
        .iter()
        .map(|&label| {
            let stock_in = rng.random_range(35_000.0..80_000.0);
            let ratio = rng.random_range(0.65..0.95);
            flow_point(label, stock_in, ratio)
        })
        .collect();

    let yearly = YEARS
        .iter()
        .map(|&label| {
            let stock_in = rng.random_range(180_000.0..430_000.0);
            let ratio = rng.random_range(0.75..0.95);
            flow_point(label, stock_in, ratio)
        })
        .collect();

    StockFlowCharts {
        monthly,
        quarterly,
        yearly,
    }
}

fn history_logs(accounts: &[AccountRecord]) -> (Vec<LogEntry>, Vec<LogEntry>) {
    let mut logins: Vec<LogEntry> = accounts
        .iter()
        .flat_map(|account| {
            account.login_logs.iter().map(|log| LogEntry {
                user_name: account.name.clone(),
                at: log.at,
                kind: LogKind::Login,
            })
        })
        .collect();
    logins.sort_by(|a, b| b.at.cmp(&a.at));

    let mut registrations: Vec<LogEntry> = accounts
        .iter()
        .map(|account| LogEntry {
            user_name: account.name.clone(),
            at: account.registered_at,
            kind: LogKind::Registration,
        })
        .collect();
    registrations.sort_by(|a, b| b.at.cmp(&a.at));

    (logins, registrations)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn fabricate(seed: u64) -> (Catalog, Dashboard) {
        let mut rng = StdRng::seed_from_u64(seed);
        let catalog = Catalog::generate(crate::catalog::PRODUCT_COUNT, &mut rng);
        let now = Utc.with_ymd_and_hms(2026, 2, 21, 12, 0, 0).unwrap();
        let dashboard = Dashboard::fabricate(&catalog, now, &mut rng);
        (catalog, dashboard)
    }

    #[test]
    fn test_pads_accounts() {
        let (_, dashboard) = fabricate(1);
        assert_eq!(dashboard.accounts.len(), 2 + EXTRA_ACCOUNTS);
        assert!(
            dashboard.accounts[2..]
                .iter()
                .all(|a| a.login_logs[0].ip.starts_with("192.168.1."))
        );
    }

    #[test]
    fn test_order_count_and_revenue_scaling() {
        let (_, dashboard) = fabricate(2);
        // Only the demo customer has orders: 199,000 + 2 x 399,000 + 429,000
        assert_eq!(dashboard.orders.len(), 3);
        assert_eq!(dashboard.display_order_count, 3 * 124);
        assert_eq!(dashboard.total_revenue, Price::idr(1_426_000).times(85));
        assert!(
            dashboard
                .orders
                .windows(2)
                .all(|w| w[0].order.placed_at >= w[1].order.placed_at)
        );
        assert_eq!(dashboard.orders[0].user_name, "Dini Cahyo");
    }

    #[test]
    fn test_branch_weights_and_stock() {
        let (catalog, dashboard) = fabricate(3);
        assert_eq!(dashboard.branches.len(), 3);
        for branch in &dashboard.branches {
            assert!((0.25..0.75).contains(&branch.weight));
            assert_eq!(branch.stock, catalog.stock_at_store(&branch.store.id));
            assert!(branch.sales < dashboard.total_revenue);
            assert!(branch.order_count < dashboard.display_order_count);
        }
    }

    #[test]
    fn test_chart_series_shapes() {
        let (_, dashboard) = fabricate(4);
        let charts = &dashboard.charts;
        assert_eq!(charts.series(ChartPeriod::Monthly).len(), 12);
        assert_eq!(charts.series(ChartPeriod::Quarterly)[0].label, "2025-Q1");
        assert_eq!(charts.series(ChartPeriod::Yearly)[3].label, "2026");

        for point in charts.monthly.iter().chain(&charts.quarterly).chain(&charts.yearly) {
            assert!(point.stock_out <= point.stock_in);
        }
        // November carries the 1.8 seasonal factor
        assert!(charts.monthly[10].stock_in >= 7_200);
    }

    #[test]
    fn test_search_accounts_case_insensitive() {
        let (_, dashboard) = fabricate(5);
        let hits = dashboard.search_accounts("DINI.CAHYO");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dini Cahyo");
        assert_eq!(
            dashboard.search_accounts("").len(),
            dashboard.accounts.len()
        );
    }

    #[test]
    fn test_logs_sorted_and_limited() {
        let (_, dashboard) = fabricate(6);
        let logins = dashboard.logs(LogKind::Login, LOG_LIMIT);
        assert_eq!(logins.len(), LOG_LIMIT);
        assert!(logins.windows(2).all(|w| w[0].at >= w[1].at));

        let registrations = dashboard.logs(LogKind::Registration, 500);
        assert_eq!(registrations.len(), dashboard.accounts.len());
    }

    #[test]
    fn test_parse_period_and_log_kind() {
        assert_eq!("Yearly".parse::<ChartPeriod>().unwrap(), ChartPeriod::Yearly);
        assert!("weekly".parse::<ChartPeriod>().is_err());
        assert_eq!(
            "registration".parse::<LogKind>().unwrap(),
            LogKind::Registration
        );
    }

    #[test]
    fn test_account_initials_and_platform() {
        let (_, dashboard) = fabricate(7);
        let dini = &dashboard.accounts[0];
        assert_eq!(dini.initials(), "DC");
        assert_eq!(dini.last_platform(), "iPhone");
    }
}
