//! Rendering for gavfind outputs: the CSV report and build manifests.
//!
//! Every renderer is a pure function returning text; writing files is the caller's job.

#![forbid(unsafe_code)]

mod ant;
mod gradle;
mod maven;
mod model;
mod report;
mod xml;

pub use ant::render_ant;
pub use gradle::render_gradle;
pub use maven::render_pom;
pub use model::{AntProject, GradleProject, MavenProject, ReportRow};
pub use report::{render_report_csv, report_header};
