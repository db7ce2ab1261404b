//! Printable trip summary and share text

use chrono::NaiveDate;

use crate::currency::{format_sgd, format_yen, yen_per_sgd};
use crate::models::{City, CostBreakdown, TripConfig};

const STYLESHEET: &str = "\
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f0f2f5; padding: 40px 20px; }
    .container { max-width: 600px; margin: 0 auto; background: white; border-radius: 16px; box-shadow: 0 4px 24px rgba(0,0,0,0.12); overflow: hidden; }
    .header { background: linear-gradient(135deg, #1e3a5f 0%, #2d5a87 100%); color: white; padding: 32px; text-align: center; }
    .route { background: rgba(255,255,255,0.2); border-radius: 8px; padding: 12px; margin-top: 16px; font-size: 18px; font-weight: 600; }
    .content { padding: 32px; }
    .section { margin-bottom: 24px; }
    .section-title { font-size: 12px; text-transform: uppercase; color: #888; margin-bottom: 12px; font-weight: 600; }
    .info-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
    .info-item { background: #f8f9fa; border-radius: 8px; padding: 12px; }
    .info-label { font-size: 11px; color: #888; text-transform: uppercase; }
    .info-value { font-size: 16px; font-weight: 600; color: #333; margin-top: 4px; }
    .breakdown { background: #f8f9fa; border-radius: 12px; padding: 20px; }
    .breakdown-item { display: flex; justify-content: space-between; padding: 10px 0; border-bottom: 1px solid #eee; }
    .total-section { background: linear-gradient(135deg, #1e3a5f 0%, #2d5a87 100%); color: white; border-radius: 12px; padding: 24px; margin-top: 24px; }
    .total-main { display: flex; justify-content: space-between; margin-bottom: 16px; }
    .total-value { font-size: 32px; font-weight: 700; }
    .total-details { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; text-align: center; }
    .exchange { background: #fff3cd; border-radius: 8px; padding: 12px; text-align: center; margin-top: 16px; color: #856404; }
    .footer { text-align: center; padding: 24px; background: #f8f9fa; color: #888; font-size: 12px; }
";

fn city_list(cities: &[City], separator: &str) -> String {
    cities
        .iter()
        .map(|city| city.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// "25 Mar 2025", or "Not set"
#[must_use]
pub fn format_trip_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(
        || "Not set".to_string(),
        |d| d.format("%-d %b %Y").to_string(),
    )
}

fn travelers_label(travelers: u32) -> String {
    if travelers == 1 {
        "1 person".to_string()
    } else {
        format!("{travelers} people")
    }
}

fn info_item(label: &str, value: &str) -> String {
    format!(
        "          <div class=\"info-item\"><div class=\"info-label\">{label}</div><div class=\"info-value\">{value}</div></div>\n"
    )
}

fn breakdown_rows(breakdown: &CostBreakdown) -> String {
    breakdown
        .categories()
        .map(|(category, amount)| {
            format!(
                "          <div class=\"breakdown-item\"><span class=\"breakdown-label\">{}</span><span class=\"breakdown-value\">{}</span></div>\n",
                category.label().replace('&', "&amp;"),
                format_sgd(amount)
            )
        })
        .collect()
}

/// Self-contained HTML page summarizing the estimate
#[must_use]
pub fn render_html_summary(config: &TripConfig, breakdown: &CostBreakdown, exchange_rate: f64) -> String {
    let arrows = city_list(&config.cities, " → ");
    let details = [
        info_item("Duration", &format!("{} nights", config.nights())),
        info_item("Travelers", &travelers_label(config.travelers)),
        info_item("Departure", &format_trip_date(config.departure_date)),
        info_item("Return", &format_trip_date(config.return_date)),
        info_item("Travel Style", config.travel_style.label()),
    ]
    .concat();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Japan Trip Budget - {arrows}</title>
  <style>
{STYLESHEET}  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>Japan Trip Budget</h1>
      <p>Your personalized travel cost estimate</p>
      <div class="route">Singapore → {arrows}</div>
    </div>
    <div class="content">
      <div class="section">
        <div class="section-title">Trip Details</div>
        <div class="info-grid">
{details}        </div>
      </div>
      <div class="section">
        <div class="section-title">Cost Breakdown (SGD)</div>
        <div class="breakdown">
{rows}        </div>
      </div>
      <div class="total-section">
        <div class="total-main"><span class="total-label">Total Estimated Cost</span><span class="total-value">{total}</span></div>
        <div class="total-details">
          <div class="total-detail"><div class="total-detail-label">Per Person</div><div class="total-detail-value">{per_person}</div></div>
          <div class="total-detail"><div class="total-detail-label">Daily Average</div><div class="total-detail-value">{daily}</div></div>
        </div>
      </div>
      <div class="exchange">Exchange Rate: 1 SGD = {yen}</div>
    </div>
    <div class="footer">Generated by <strong>Japan Travel Budget Calculator</strong><br>Made for Singaporeans, by Singaporeans</div>
  </div>
</body>
</html>
"#,
        rows = breakdown_rows(breakdown),
        total = format_sgd(breakdown.total),
        per_person = format_sgd(breakdown.per_person),
        daily = format_sgd(breakdown.daily_average),
        yen = format_yen(yen_per_sgd(exchange_rate)),
    )
}

/// One-line summary for messaging apps
#[must_use]
pub fn share_text(config: &TripConfig, breakdown: &CostBreakdown) -> String {
    format!(
        "Planning a {}-day Japan trip! Total budget: {} ({}/person). Visiting: {}.",
        config.nights(),
        format_sgd(breakdown.total),
        format_sgd(breakdown.per_person),
        city_list(&config.cities, ", ")
    )
}
