use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub report_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let report_dir = make_fixture_report(tmp.path());

        Self {
            _tmp: tmp,
            home,
            report_dir,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("reviewdeck").expect("binary under test");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn scratch_path(&self, name: &str) -> PathBuf {
        self._tmp.path().join(name)
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_report(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--report")
            .arg(self.report_dir.to_str().expect("report path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn make_fixture_report(base: &Path) -> PathBuf {
    let dir = base.join("report");
    fs::create_dir_all(&dir).expect("create report dir");

    let report = serde_json::json!({
        "stage_1_descriptive_statistics": {
            "key_insights": {
                "Total Reviews": 200,
                "Number of Cities": 2,
                "Number of Restaurants": 3,
                "Number of Cuisines": 2,
                "Number of Reviewers": 180,
                "Date Range": "2024-01-01 to 2024-06-30",
                "Average Rating": 4.1,
                "Median Rating": 4.0,
                "Std Dev Rating": 0.9,
                "Avg Likes per Review": 12.5,
                "Reviews with Likes": "150 (75.0%)",
                "CV Rating (%)": 22.0,
                "CV Likes (%)": 140.0
            },
            "overall_stats": {
                "rating_overall": {
                    "count": 200.0, "mean": 4.1, "std": 0.9, "min": 1.0,
                    "25%": 4.0, "50%": 4.0, "75%": 5.0, "max": 5.0
                },
                "like_count": {
                    "count": 200.0, "mean": 12.5, "std": 20.1, "min": 0.0,
                    "25%": 0.0, "50%": 5.0, "75%": 16.0, "max": 180.0
                }
            },
            "by_city": {
                "Pune": { "count": 120, "mean": 4.2, "median": 4.0, "std": 0.8, "cv_%": 19.0 },
                "Surat": { "count": 80, "mean": 3.9, "median": 4.0, "std": 1.0, "cv_%": 25.6 }
            },
            "by_cuisine": {
                "Cafe": { "count": 90, "mean": 4.3, "median": 4.0, "std": 0.7, "cv_%": 16.3 },
                "Street Food": { "count": 110, "mean": 3.9, "median": 4.0, "std": 1.0, "cv_%": 25.6 }
            },
            "by_restaurant_top20": {
                "Corner Cafe": { "count": 90, "mean": 4.3, "median": 4.0, "std": 0.7, "cv_%": 16.3 },
                "Rasoi Express": { "count": 70, "mean": 4.0, "median": 4.0, "std": 0.9, "cv_%": 22.5 },
                "Vada Villa": { "count": 40, "mean": 3.7, "median": 4.0, "std": 1.1, "cv_%": 29.7 }
            }
        },
        "stage_2_statistical_tests": {
            "anova_by_city": {
                "F_statistic": 4.2101, "p_value": 0.0412, "eta_squared": 0.0208,
                "effect_size": "Medium", "significant": "Yes*"
            },
            "anova_by_cuisine": {
                "F_statistic": 7.914, "p_value": 0.0053, "eta_squared": 0.0384,
                "effect_size": "Medium", "significant": "Yes**"
            },
            "ttest_likes_comparison": {
                "mean_with_likes": 4.25, "mean_without_likes": 3.65,
                "mean_difference": 0.6, "t_statistic": 4.8812, "p_value": 0.0,
                "cohens_d": 0.71, "significant": "Yes***",
                "n_with_likes": 150, "n_without_likes": 50
            },
            "correlation_rating_likes": {
                "pearson_r": 0.31, "p_value": 0.0001,
                "strength": "Moderate", "significant": "Yes***"
            }
        },
        "stage_3_outlier_detection": {
            "rating_outliers_iqr": {
                "Q1": 4.0, "Q3": 5.0, "IQR": 1.0, "lower_bound": 2.5,
                "upper_bound": 6.5, "outlier_count": 6, "outlier_percentage": 3.0
            },
            "likes_outliers_iqr": {
                "Q1": 0.0, "Q3": 16.0, "IQR": 16.0, "lower_bound": -24.0,
                "upper_bound": 40.0, "outlier_count": 14, "outlier_percentage": 7.0
            },
            "rating_outliers_zscore": {
                "mean": 4.1, "std_dev": 0.9, "threshold": 3,
                "outlier_count": 2, "outlier_percentage": 1.0
            },
            "likes_outliers_zscore": {
                "mean": 12.5, "std_dev": 20.1, "threshold": 3,
                "outlier_count": 5, "outlier_percentage": 2.5
            },
            "restaurant_rating_outliers_iqr": {
                "Q1": 3.85, "Q3": 4.15, "IQR": 0.3, "lower_bound": 3.4,
                "upper_bound": 4.6, "outlier_count": 0
            },
            "anomaly_count": 18,
            "anomaly_percentage": 9.0
        },
        "stage_4_time_series": {
            "cuisine_overall_top": [
                { "primary_cuisine": "Cafe", "rating_count": 90, "mean_rating": 4.3 },
                { "primary_cuisine": "Street Food", "rating_count": 110, "mean_rating": 3.9 }
            ],
            "ts_daily_overall_top": [
                { "2024-02-14": { "rating_count": 9, "mean_rating": 4.8 } }
            ],
            "ts_monthly_overall_top": [
                { "2024-02": { "rating_count": 38, "mean_rating": 4.4 } }
            ],
            "ts_monthly_by_city_top": [
                {
                    "created_at": "2024-02-01", "city": "Pune",
                    "mean_rating": 4.5, "rating_count": 24, "mean_likes": 15.2
                }
            ]
        }
    });
    fs::write(
        dir.join("report_data.json"),
        serde_json::to_string_pretty(&report).expect("serialize fixture report"),
    )
    .expect("write fixture report");

    dir
}
