use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::constants::DEFAULT_REPORT_SOURCE;

const SAMPLE_REPORT_JSON: &str = include_str!("../data/sample_report.json");
const REPORT_SCHEMA_JSON: &str = include_str!("../docs/contracts/report.schema.json");

/// Lenient typed view over an acquired report document.
///
/// The loader transports documents opaquely; only the presentation layer
/// projects them through this type. Every stage is optional so a partial
/// document still renders section by section.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct ReportData {
    pub stage_1_descriptive_statistics: Option<DescriptiveStats>,
    pub stage_2_statistical_tests: Option<HypothesisTests>,
    pub stage_3_outlier_detection: Option<OutlierSummary>,
    pub stage_4_time_series: Option<TimeSeries>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct DescriptiveStats {
    pub key_insights: KeyInsights,
    pub overall_stats: OverallStats,
    pub by_city: BTreeMap<String, GroupStats>,
    pub by_cuisine: BTreeMap<String, GroupStats>,
    pub by_restaurant_top20: BTreeMap<String, GroupStats>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct KeyInsights {
    #[serde(rename = "Total Reviews")]
    pub total_reviews: u64,
    #[serde(rename = "Number of Cities")]
    pub cities: u64,
    #[serde(rename = "Number of Restaurants")]
    pub restaurants: u64,
    #[serde(rename = "Number of Cuisines")]
    pub cuisines: u64,
    #[serde(rename = "Number of Reviewers")]
    pub reviewers: u64,
    #[serde(rename = "Date Range")]
    pub date_range: String,
    #[serde(rename = "Average Rating")]
    pub average_rating: f64,
    #[serde(rename = "Median Rating")]
    pub median_rating: f64,
    #[serde(rename = "Std Dev Rating")]
    pub std_dev_rating: f64,
    #[serde(rename = "Avg Likes per Review")]
    pub avg_likes_per_review: f64,
    #[serde(rename = "Reviews with Likes")]
    pub reviews_with_likes: String,
    #[serde(rename = "CV Rating (%)")]
    pub cv_rating_pct: f64,
    #[serde(rename = "CV Likes (%)")]
    pub cv_likes_pct: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct OverallStats {
    pub rating_overall: DescribeSummary,
    pub like_count: DescribeSummary,
}

/// One pandas-describe row: count/mean/std plus the five-number summary.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct DescribeSummary {
    pub count: f64,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    #[serde(rename = "25%")]
    pub q25: f64,
    #[serde(rename = "50%")]
    pub q50: f64,
    #[serde(rename = "75%")]
    pub q75: f64,
    pub max: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct GroupStats {
    pub count: f64,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    #[serde(rename = "cv_%")]
    pub cv_pct: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct HypothesisTests {
    pub anova_by_city: AnovaTest,
    pub anova_by_cuisine: AnovaTest,
    pub ttest_likes_comparison: TtestLikes,
    pub correlation_rating_likes: CorrelationTest,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct AnovaTest {
    #[serde(rename = "F_statistic")]
    pub f_statistic: f64,
    pub p_value: f64,
    pub eta_squared: f64,
    pub effect_size: String,
    pub significant: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct TtestLikes {
    pub mean_with_likes: f64,
    pub mean_without_likes: f64,
    pub mean_difference: f64,
    pub t_statistic: f64,
    pub p_value: f64,
    pub cohens_d: f64,
    pub significant: String,
    pub n_with_likes: u64,
    pub n_without_likes: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct CorrelationTest {
    pub pearson_r: f64,
    pub p_value: f64,
    pub strength: String,
    pub significant: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct OutlierSummary {
    pub rating_outliers_iqr: IqrOutliers,
    pub likes_outliers_iqr: IqrOutliers,
    pub rating_outliers_zscore: ZscoreOutliers,
    pub likes_outliers_zscore: ZscoreOutliers,
    pub restaurant_rating_outliers_iqr: IqrOutliers,
    pub anomaly_count: u64,
    pub anomaly_percentage: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct IqrOutliers {
    #[serde(rename = "Q1")]
    pub q1: f64,
    #[serde(rename = "Q3")]
    pub q3: f64,
    #[serde(rename = "IQR")]
    pub iqr: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub outlier_count: u64,
    pub outlier_percentage: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct ZscoreOutliers {
    pub mean: f64,
    pub std_dev: f64,
    pub threshold: f64,
    pub outlier_count: u64,
    pub outlier_percentage: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct TimeSeries {
    pub cuisine_overall_top: Vec<CuisineRating>,
    pub ts_daily_overall_top: Vec<BTreeMap<String, PeriodStats>>,
    pub ts_monthly_overall_top: Vec<BTreeMap<String, PeriodStats>>,
    pub ts_monthly_by_city_top: Vec<CityMonthRow>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct CuisineRating {
    pub primary_cuisine: String,
    pub rating_count: f64,
    pub mean_rating: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct PeriodStats {
    pub rating_count: f64,
    pub mean_rating: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct CityMonthRow {
    pub created_at: String,
    pub city: String,
    pub mean_rating: f64,
    pub rating_count: f64,
    pub mean_likes: f64,
}

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("document does not match the report schema: {0}")]
    SchemaMismatch(String),
}

impl ReportData {
    pub fn from_document(doc: &Value) -> anyhow::Result<Self> {
        Ok(serde_json::from_value(doc.clone())?)
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

pub fn resolve_report_file(source: &str) -> PathBuf {
    let p = Path::new(source);
    if p.is_dir() {
        p.join(DEFAULT_REPORT_SOURCE)
    } else {
        p.to_path_buf()
    }
}

/// Single retrieval attempt against a file, directory, or URL source.
/// The caller decides what a failure means; this function never falls back.
pub fn fetch_document(source: &str, timeout_ms: u64) -> anyhow::Result<Value> {
    if is_remote(source) {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        let body = client.get(source).send()?.error_for_status()?.text()?;
        return Ok(serde_json::from_str(&body)?);
    }

    let file = resolve_report_file(source);
    let raw = std::fs::read_to_string(file)?;
    Ok(serde_json::from_str(&raw)?)
}

/// The bundled sample document. The asset is compiled into the binary and
/// checked by the contracts test, so parsing it cannot fail at runtime.
pub fn sample_document() -> Value {
    serde_json::from_str(SAMPLE_REPORT_JSON).expect("bundled sample report parses")
}

pub fn validate(doc: &Value) -> anyhow::Result<()> {
    let schema: Value = serde_json::from_str(REPORT_SCHEMA_JSON)?;
    let compiled = match jsonschema::JSONSchema::compile(&schema) {
        Ok(c) => c,
        Err(e) => anyhow::bail!("embedded report schema is invalid: {}", e),
    };
    if let Err(errors) = compiled.validate(doc) {
        let msgs: Vec<String> = errors.map(|e| e.to_string()).collect();
        return Err(ReportError::SchemaMismatch(msgs.join(" | ")).into());
    }
    Ok(())
}
