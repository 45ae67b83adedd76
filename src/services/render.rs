use crate::report::{DescriptiveStats, HypothesisTests, OutlierSummary, TimeSeries};
use crate::services::format::{fixed, meter, strength_desc, thousands, thousands_f};

/// Executive summary: headline metrics plus the variability meters.
pub fn summary_lines(stats: &DescriptiveStats) -> Vec<String> {
    let k = &stats.key_insights;
    vec![
        "Quantitative Analysis".to_string(),
        format!(
            "{} customer reviews across {} cities, {} restaurants, and {} cuisines ({})",
            thousands(k.total_reviews),
            k.cities,
            k.restaurants,
            k.cuisines,
            k.date_range
        ),
        String::new(),
        format!("average rating: {} out of 5.0", fixed(k.average_rating, 2)),
        format!(
            "median rating: {} ({} std dev)",
            k.median_rating, k.std_dev_rating
        ),
        format!(
            "avg likes/review: {} ({})",
            k.avg_likes_per_review.round() as i64,
            k.reviews_with_likes
        ),
        format!("reviewers: {} unique", thousands(k.reviewers)),
        format!(
            "rating variability: {} {}%",
            meter(k.cv_rating_pct),
            fixed(k.cv_rating_pct, 1)
        ),
        format!(
            "likes variability: {} {}%",
            meter(k.cv_likes_pct),
            fixed(k.cv_likes_pct, 1)
        ),
    ]
}

/// Quartile summaries for rating and likes, then the per-city table.
/// Likes figures round to whole numbers, matching the upstream report.
pub fn distribution_lines(stats: &DescriptiveStats) -> Vec<String> {
    let rating = &stats.overall_stats.rating_overall;
    let likes = &stats.overall_stats.like_count;
    let mut lines = vec![
        "rating distribution".to_string(),
        format!("min: {}", fixed(rating.min, 2)),
        format!("25th percentile: {}", fixed(rating.q25, 2)),
        format!("median: {}", fixed(rating.q50, 2)),
        format!("75th percentile: {}", fixed(rating.q75, 2)),
        format!("max: {}", fixed(rating.max, 2)),
        format!("mean: {}", fixed(rating.mean, 2)),
        format!("std dev: {}", fixed(rating.std, 2)),
        String::new(),
        "likes distribution".to_string(),
        format!("min: {}", likes.min.round() as i64),
        format!("25th percentile: {}", likes.q25.round() as i64),
        format!("median: {}", likes.q50.round() as i64),
        format!("75th percentile: {}", likes.q75.round() as i64),
        format!("max: {}", likes.max.round() as i64),
        format!("mean: {}", likes.mean.round() as i64),
        format!("std dev: {}", likes.std.round() as i64),
        String::new(),
        "performance by city".to_string(),
        "city\treviews\tavg\tmedian\tstd\tcv%".to_string(),
    ];
    for (city, g) in &stats.by_city {
        lines.push(format!(
            "{}\t{}\t{}\t{}\t{}\t{}%",
            city,
            thousands_f(g.count),
            fixed(g.mean, 2),
            fixed(g.median, 2),
            fixed(g.std, 2),
            fixed(g.cv_pct, 1)
        ));
    }
    lines
}

/// Cuisine and restaurant breakdowns. Restaurants are ordered by review
/// volume; consistency is the inverse of the coefficient of variation.
pub fn segments_lines(stats: &DescriptiveStats, series: Option<&TimeSeries>) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(series) = series {
        if !series.cuisine_overall_top.is_empty() {
            lines.push("top cuisines by rating".to_string());
            for c in series.cuisine_overall_top.iter().take(5) {
                lines.push(format!(
                    "{}\t{} reviews\t{}",
                    c.primary_cuisine,
                    thousands_f(c.rating_count),
                    fixed(c.mean_rating, 2)
                ));
            }
            lines.push(String::new());
        }
    }

    lines.push("full cuisine breakdown".to_string());
    lines.push("cuisine\treviews\trating\tcv%".to_string());
    for (cuisine, g) in &stats.by_cuisine {
        lines.push(format!(
            "{}\t{}\t{}\t{}%",
            cuisine,
            thousands_f(g.count),
            fixed(g.mean, 2),
            fixed(g.cv_pct, 1)
        ));
    }

    lines.push(String::new());
    lines.push("top restaurants by review volume".to_string());
    lines.push("restaurant\treviews\tavg\tmedian\tstd\tconsistency".to_string());
    let mut restaurants: Vec<_> = stats.by_restaurant_top20.iter().collect();
    restaurants.sort_by(|a, b| {
        b.1.count
            .partial_cmp(&a.1.count)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    for (name, g) in restaurants.into_iter().take(20) {
        let consistency = (100.0 - g.cv_pct).max(0.0);
        lines.push(format!(
            "{}\t{}\t{}\t{}\t{}\t{} {}%",
            name,
            thousands_f(g.count),
            fixed(g.mean, 2),
            fixed(g.median, 2),
            fixed(g.std, 2),
            meter(consistency),
            fixed(consistency, 1)
        ));
    }
    lines
}

pub fn tests_lines(tests: &HypothesisTests) -> Vec<String> {
    let mut lines = Vec::new();
    for (title, anova) in [
        ("ANOVA: city effect", &tests.anova_by_city),
        ("ANOVA: cuisine effect", &tests.anova_by_cuisine),
    ] {
        lines.push(title.to_string());
        lines.push(format!("F-statistic: {}", fixed(anova.f_statistic, 4)));
        lines.push(format!("p-value: {}", fixed(anova.p_value, 4)));
        lines.push(format!("eta squared: {}", fixed(anova.eta_squared, 6)));
        lines.push(format!("effect size: {}", anova.effect_size));
        lines.push(format!("significant: {}", anova.significant));
        lines.push(String::new());
    }

    let t = &tests.ttest_likes_comparison;
    lines.push("t-test: likes impact".to_string());
    lines.push(format!(
        "with likes (n={}): {} avg",
        thousands(t.n_with_likes),
        fixed(t.mean_with_likes, 2)
    ));
    lines.push(format!(
        "without likes (n={}): {} avg",
        thousands(t.n_without_likes),
        fixed(t.mean_without_likes, 2)
    ));
    lines.push(format!("difference: {}", fixed(t.mean_difference, 2)));
    lines.push(format!("t-statistic: {}", fixed(t.t_statistic, 4)));
    lines.push(format!("Cohen's d: {}", fixed(t.cohens_d, 4)));
    lines.push(format!("significant: {}", t.significant));
    lines.push(String::new());

    let c = &tests.correlation_rating_likes;
    lines.push("correlation: rating vs likes".to_string());
    lines.push(format!("Pearson r: {}", fixed(c.pearson_r, 4)));
    lines.push(format!("p-value: {}", fixed(c.p_value, 4)));
    lines.push(format!("strength: {}", c.strength));
    lines.push(format!("significant: {}", c.significant));
    lines.push(format!(
        "interpretation: {} relationship between ratings and engagement (likes)",
        strength_desc(c.pearson_r)
    ));
    lines
}

pub fn outliers_lines(outliers: &OutlierSummary) -> Vec<String> {
    let rating_iqr = &outliers.rating_outliers_iqr;
    let likes_iqr = &outliers.likes_outliers_iqr;
    let rating_z = &outliers.rating_outliers_zscore;
    let likes_z = &outliers.likes_outliers_zscore;
    let restaurant = &outliers.restaurant_rating_outliers_iqr;

    let mut lines = vec![
        "rating outliers (IQR)".to_string(),
        format!("Q1: {}", fixed(rating_iqr.q1, 2)),
        format!("Q3: {}", fixed(rating_iqr.q3, 2)),
        format!("IQR: {}", fixed(rating_iqr.iqr, 2)),
        format!(
            "bounds: [{}, {}]",
            fixed(rating_iqr.lower_bound, 2),
            fixed(rating_iqr.upper_bound, 2)
        ),
        format!(
            "outliers found: {} ({}%)",
            thousands(rating_iqr.outlier_count),
            fixed(rating_iqr.outlier_percentage, 2)
        ),
        String::new(),
        "likes outliers (IQR)".to_string(),
        format!("Q1: {}", likes_iqr.q1.round() as i64),
        format!("Q3: {}", likes_iqr.q3.round() as i64),
        format!("IQR: {}", likes_iqr.iqr.round() as i64),
        format!(
            "bounds: [{}, {}]",
            likes_iqr.lower_bound.round() as i64,
            likes_iqr.upper_bound.round() as i64
        ),
        format!(
            "outliers found: {} ({}%)",
            thousands(likes_iqr.outlier_count),
            fixed(likes_iqr.outlier_percentage, 2)
        ),
        String::new(),
        "rating outliers (z-score)".to_string(),
        format!("mean: {}", fixed(rating_z.mean, 2)),
        format!("std dev: {}", fixed(rating_z.std_dev, 2)),
        format!("threshold: {}", fixed(rating_z.threshold, 0)),
        format!(
            "outliers found: {} ({}%)",
            thousands(rating_z.outlier_count),
            fixed(rating_z.outlier_percentage, 2)
        ),
        String::new(),
        "likes outliers (z-score)".to_string(),
        format!("mean: {}", likes_z.mean.round() as i64),
        format!("std dev: {}", likes_z.std_dev.round() as i64),
        format!("threshold: {}", fixed(likes_z.threshold, 0)),
        format!(
            "outliers found: {} ({}%)",
            thousands(likes_z.outlier_count),
            fixed(likes_z.outlier_percentage, 2)
        ),
        String::new(),
        "restaurant-level rating anomalies".to_string(),
        format!("Q1: {}", fixed(restaurant.q1, 3)),
        format!("Q3: {}", fixed(restaurant.q3, 3)),
        format!(
            "bounds: [{}, {}]",
            fixed(restaurant.lower_bound, 3),
            fixed(restaurant.upper_bound, 3)
        ),
        format!("anomalies: {}", thousands(restaurant.outlier_count)),
        String::new(),
        "anomaly summary".to_string(),
        format!("total anomalies: {}", thousands(outliers.anomaly_count)),
        format!(
            "share of dataset: {}%",
            fixed(outliers.anomaly_percentage, 2)
        ),
    ];
    let quality = (100.0 - outliers.anomaly_percentage).round();
    lines.push(format!("data quality score: {quality}%"));
    lines
}

pub fn trends_lines(series: &TimeSeries) -> Vec<String> {
    let mut lines = vec!["top days by average rating".to_string()];
    for entry in series.ts_daily_overall_top.iter().take(5) {
        for (day, stats) in entry {
            lines.push(format!(
                "{}\t{} reviews\t{}",
                day,
                thousands_f(stats.rating_count),
                fixed(stats.mean_rating, 2)
            ));
        }
    }

    lines.push(String::new());
    lines.push("top months by average rating".to_string());
    for entry in series.ts_monthly_overall_top.iter().take(5) {
        for (month, stats) in entry {
            lines.push(format!(
                "{}\t{} reviews\t{}",
                month,
                thousands_f(stats.rating_count),
                fixed(stats.mean_rating, 2)
            ));
        }
    }

    lines.push(String::new());
    lines.push("top cities by month".to_string());
    lines.push("month\tcity\tavg rating\treviews\tavg likes".to_string());
    for row in &series.ts_monthly_by_city_top {
        let month = if row.created_at.len() >= 7 {
            &row.created_at[..7]
        } else {
            row.created_at.as_str()
        };
        lines.push(format!(
            "{}\t{}\t{}\t{}\t{}",
            month,
            row.city,
            fixed(row.mean_rating, 2),
            thousands_f(row.rating_count),
            row.mean_likes.round() as i64
        ));
    }
    lines
}
