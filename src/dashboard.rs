//! Dashboard Generator Module
//! Renders the four datasets as SVG charts and assembles the static HTML page.
//!
//! Chart order is fixed: skills, salary, seniority, responsibilities. The
//! first failure halts generation and propagates; charts declared after it
//! are not rendered.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;
use tracing::info;

use crate::charts::{
    ChartConfig, ChartRenderer, RenderError, RESPONSIBILITY_PURPLE, SALARY_TEAL, SKILLS_BLUE,
};
use crate::data::DatasetBundle;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("failed to write dashboard files: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
}

const SKILLS_TITLE: &str = "Top Required Skills";
const SALARY_TITLE: &str = "Average Salary by Region";
const SENIORITY_TITLE: &str = "Position Levels";
const RESPONSIBILITY_TITLE: &str = "Main Responsibilities";

const MENTIONS_AXIS: &str = "Mentions Count";
const SALARY_AXIS: &str = "Salary (RUB)";

const BAR_CHART_SIZE: (u32, u32) = (760, 420);
const PIE_CHART_SIZE: (u32, u32) = (560, 420);

/// Files written by one generation run.
#[derive(Debug)]
pub struct GeneratedDashboard {
    pub index_html: PathBuf,
    pub chart_files: Vec<PathBuf>,
}

/// One-shot generator for the static dashboard page.
pub struct DashboardGenerator;

impl DashboardGenerator {
    /// Generate the dashboard under `out_dir`, dated today (day/month/year).
    pub fn generate(
        bundle: &DatasetBundle,
        out_dir: &Path,
    ) -> Result<GeneratedDashboard, DashboardError> {
        let date_label = Local::now().format("%d/%m/%Y").to_string();
        Self::generate_with_date(bundle, out_dir, &date_label)
    }

    /// Generate the dashboard with an explicit date label.
    pub fn generate_with_date(
        bundle: &DatasetBundle,
        out_dir: &Path,
        date_label: &str,
    ) -> Result<GeneratedDashboard, DashboardError> {
        let charts_dir = out_dir.join("charts");
        fs::create_dir_all(&charts_dir)?;

        let charts = [
            (
                "skills.svg",
                ChartConfig::horizontal_bar(SKILLS_TITLE, &bundle.skills, SKILLS_BLUE, MENTIONS_AXIS),
                BAR_CHART_SIZE,
            ),
            (
                "salary.svg",
                ChartConfig::bar(SALARY_TITLE, &bundle.salary_by_region, SALARY_TEAL, SALARY_AXIS),
                BAR_CHART_SIZE,
            ),
            (
                "seniority.svg",
                ChartConfig::pie(SENIORITY_TITLE, &bundle.seniority),
                PIE_CHART_SIZE,
            ),
            (
                "responsibility.svg",
                ChartConfig::horizontal_bar(
                    RESPONSIBILITY_TITLE,
                    &bundle.responsibilities,
                    RESPONSIBILITY_PURPLE,
                    MENTIONS_AXIS,
                ),
                BAR_CHART_SIZE,
            ),
        ];

        let mut chart_files = Vec::with_capacity(charts.len());
        for (file_name, config, size) in charts {
            let path = charts_dir.join(file_name);
            info!(chart = %config.title, file = %path.display(), "rendering chart");
            ChartRenderer::render_svg(&config, &path, size)?;
            chart_files.push(path);
        }

        let index_html = out_dir.join("index.html");
        fs::write(&index_html, Self::index_html(date_label))?;
        info!(file = %index_html.display(), "dashboard page written");

        Ok(GeneratedDashboard {
            index_html,
            chart_files,
        })
    }

    fn index_html(date_label: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Data Analyst Job Market Dashboard</title>
<style>{css}</style>
</head>
<body>
<header>
<h1>Data Analyst Job Market Dashboard</h1>
<p class="date">Generated on <span id="date">{date}</span></p>
</header>
<main>
<section class="card"><h2>{skills}</h2><img src="charts/skills.svg" alt="{skills}"></section>
<section class="card"><h2>{salary}</h2><img src="charts/salary.svg" alt="{salary}"></section>
<section class="card"><h2>{seniority}</h2><img src="charts/seniority.svg" alt="{seniority}"></section>
<section class="card"><h2>{responsibility}</h2><img src="charts/responsibility.svg" alt="{responsibility}"></section>
</main>
</body>
</html>
"#,
            css = PAGE_CSS,
            date = date_label,
            skills = SKILLS_TITLE,
            salary = SALARY_TITLE,
            seniority = SENIORITY_TITLE,
            responsibility = RESPONSIBILITY_TITLE,
        )
    }
}

const PAGE_CSS: &str = r#"
body { margin: 0; font-family: system-ui, -apple-system, sans-serif; background: #f4f6f8; color: #1c2733; }
header { padding: 24px 32px; background: #ffffff; border-bottom: 1px solid rgba(0, 0, 0, 0.08); }
header h1 { margin: 0; font-size: 24px; }
.date { margin: 4px 0 0; color: #5b6678; font-size: 14px; }
main { display: grid; grid-template-columns: repeat(auto-fit, minmax(560px, 1fr)); gap: 24px; padding: 32px; }
.card { background: #ffffff; border: 1px solid rgba(0, 0, 0, 0.06); border-radius: 10px; padding: 16px 20px; }
.card h2 { margin: 0 0 12px; font-size: 17px; }
.card img { width: 100%; height: auto; }
"#;
