use std::fs;
use std::path::PathBuf;

use vacancy_dashboard::charts::{ChartConfig, ChartStyle, SKILLS_BLUE};
use vacancy_dashboard::{DashboardGenerator, DatasetBundle, DatasetLoader};

fn out_dir(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join("vacancy_dashboard_integration")
        .join(name)
}

#[test]
fn two_skill_bundle_produces_a_two_bar_skills_chart() {
    let bundle = DatasetLoader::from_json_str(
        r#"{
            "skills": {"Python": 10, "SQL": 7},
            "salary_by_region": {"Moscow": 250000, "Novosibirsk": 130000},
            "seniority": {"Junior": 12, "Middle": 30, "Senior": 18, "Lead": 5},
            "responsibilities": {"Data Analysis": 40, "Reporting": 22}
        }"#,
    )
    .expect("bundle");

    let config = ChartConfig::horizontal_bar(
        "Top Required Skills",
        &bundle.skills,
        SKILLS_BLUE,
        "Mentions Count",
    );
    assert_eq!(config.labels, vec!["Python", "SQL"]);
    assert_eq!(config.values, vec![10.0, 7.0]);
    let ChartStyle::HorizontalBar {
        fill,
        border,
        value_axis_label,
    } = &config.style
    else {
        panic!("expected horizontal bar style");
    };
    assert_eq!(fill.to_css(), "rgba(54, 162, 235, 0.6)");
    assert_eq!(border.to_css(), "rgba(54, 162, 235, 1)");
    assert_eq!(value_axis_label, "Mentions Count");

    let generated =
        DashboardGenerator::generate_with_date(&bundle, &out_dir("two_skills"), "30/08/2026")
            .expect("generate");

    let skills_svg = fs::read_to_string(&generated.chart_files[0]).expect("skills chart");
    assert!(skills_svg.contains("Python"));
    assert!(skills_svg.contains("SQL"));
    assert!(skills_svg.contains("Mentions Count"));
}

#[test]
fn page_carries_date_and_embeds_all_four_charts() {
    let bundle = DatasetLoader::from_json_str(
        r#"{
            "skills": {"Python": 10},
            "salary_by_region": {"Moscow": 250000},
            "seniority": {"Junior": 12},
            "responsibilities": {"Reporting": 22}
        }"#,
    )
    .expect("bundle");

    let generated =
        DashboardGenerator::generate_with_date(&bundle, &out_dir("page"), "30/08/2026")
            .expect("generate");

    let html = fs::read_to_string(&generated.index_html).expect("page");
    assert!(html.contains(r#"<span id="date">30/08/2026</span>"#));
    for chart in [
        "charts/skills.svg",
        "charts/salary.svg",
        "charts/seniority.svg",
        "charts/responsibility.svg",
    ] {
        assert!(html.contains(chart), "page must embed {chart}");
    }
}

#[test]
fn empty_bundle_generates_page_and_charts_without_error() {
    let bundle = DatasetBundle::default();

    let generated =
        DashboardGenerator::generate_with_date(&bundle, &out_dir("empty"), "30/08/2026")
            .expect("empty bundle must generate");

    assert!(generated.index_html.exists());
    assert_eq!(generated.chart_files.len(), 4);
    for path in &generated.chart_files {
        let svg = fs::read_to_string(path).expect("chart file");
        assert!(svg.contains("<svg"), "{} must be a valid svg", path.display());
    }
}

#[test]
fn regeneration_overwrites_previous_output() {
    let dir = out_dir("overwrite");

    let first = DatasetLoader::from_json_str(
        r#"{
            "skills": {"Python": 10},
            "salary_by_region": {},
            "seniority": {},
            "responsibilities": {}
        }"#,
    )
    .expect("bundle");
    DashboardGenerator::generate_with_date(&first, &dir, "29/08/2026").expect("first run");

    let second = DatasetLoader::from_json_str(
        r#"{
            "skills": {"Rust": 3},
            "salary_by_region": {},
            "seniority": {},
            "responsibilities": {}
        }"#,
    )
    .expect("bundle");
    let generated =
        DashboardGenerator::generate_with_date(&second, &dir, "30/08/2026").expect("second run");

    let html = fs::read_to_string(&generated.index_html).expect("page");
    assert!(html.contains("30/08/2026"));
    assert!(!html.contains("29/08/2026"));

    let skills_svg = fs::read_to_string(&generated.chart_files[0]).expect("skills chart");
    assert!(skills_svg.contains("Rust"));
    assert!(!skills_svg.contains("Python"));
}
