//! Exit valuation estimate from projected revenue, profit and client count

/// Weight placed on the revenue-based valuation
pub const REVENUE_WEIGHT: f64 = 0.7;

/// Profit is valued at this multiple of the industry multiple
pub const PROFIT_MULTIPLE_FACTOR: f64 = 1.5;

/// Weight placed on the profit-based valuation
pub const PROFIT_WEIGHT: f64 = 0.3;

/// Flat premium per projected client
pub const CLIENT_PREMIUM: f64 = 500.0;

/// Estimate the sale value of the practice at the end of the projection horizon.
///
/// Annual revenue, profit and clients are grown at `projected_growth_rate`
/// (percent per year) over `projection_months / 12` years, then valued as
/// 70% revenue multiple + 30% profit multiple (at 1.5x the industry multiple)
/// plus $500 per projected client.
pub fn estimate_exit_valuation(
    annual_revenue: f64,
    annual_profit: f64,
    industry_multiple: f64,
    projected_growth_rate: f64,
    active_clients: f64,
    projection_months: u32,
) -> f64 {
    let projected_years = projection_months as f64 / 12.0;
    let growth_factor = (1.0 + projected_growth_rate / 100.0).powf(projected_years);

    let projected_revenue = annual_revenue * growth_factor;
    let projected_profit = annual_profit * growth_factor;
    let projected_clients = active_clients * growth_factor;

    let revenue_multiple = industry_multiple * REVENUE_WEIGHT;
    let profit_multiple = industry_multiple * PROFIT_MULTIPLE_FACTOR * PROFIT_WEIGHT;

    let valuation_by_revenue = projected_revenue * revenue_multiple;
    let valuation_by_profit = projected_profit * profit_multiple;
    let client_premium = projected_clients * CLIENT_PREMIUM;

    valuation_by_revenue + valuation_by_profit + client_premium
}
