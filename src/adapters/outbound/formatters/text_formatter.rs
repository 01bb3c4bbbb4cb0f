use crate::application::read_models::{ChainSection, PackageReport};
use crate::install_analysis::domain::CHAIN_SEPARATOR;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Width of the label column in the header block
const LABEL_WIDTH: usize = 14;

/// Placeholder for empty lists
const NONE: &str = "None";

/// TextFormatter adapter for the human-readable terminal report
///
/// Colors are applied only when enabled, so the same formatter serves
/// terminals, pipes and files.
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn label(&self, text: &str) -> String {
        let padded = format!("{:<width$}", format!("{}:", text), width = LABEL_WIDTH);
        if self.color {
            padded.bold().to_string()
        } else {
            padded
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().underline().to_string()
        } else {
            text.to_string()
        }
    }

    fn package(&self, name: &str) -> String {
        if self.color {
            name.cyan().bold().to_string()
        } else {
            name.to_string()
        }
    }

    fn dimmed(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn reason(&self, report: &PackageReport) -> String {
        match (self.color, report.is_explicit) {
            (false, _) => report.reason_statement.clone(),
            (true, true) => report.reason_statement.green().to_string(),
            (true, false) => report.reason_statement.yellow().to_string(),
        }
    }

    fn chain(&self, packages: &[String]) -> String {
        let separator = self.dimmed(CHAIN_SEPARATOR);
        let Some((target, rest)) = packages.split_last() else {
            return String::new();
        };
        let mut line = String::new();
        for package in rest {
            line.push_str(package);
            line.push_str(&separator);
        }
        line.push_str(&self.package(target));
        line
    }

    fn write_header(&self, out: &mut String, report: &PackageReport) -> std::fmt::Result {
        let version = if report.version.is_empty() {
            String::new()
        } else {
            format!(" {}", report.version)
        };
        writeln!(
            out,
            "{}{}{}",
            self.label("Package"),
            self.package(&report.name),
            version
        )?;
        if let Some(description) = &report.description {
            writeln!(out, "{}{}", self.label("Description"), description)?;
        }
        writeln!(out, "{}{}", self.label("Reason"), self.reason(report))?;
        if let Some(date) = &report.install_date {
            writeln!(out, "{}{}", self.label("Install Date"), date)?;
        }
        Ok(())
    }

    fn write_chains(
        &self,
        out: &mut String,
        section: &ChainSection,
        report: &PackageReport,
    ) -> std::fmt::Result {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            self.heading(&format!("Installation chains ({})", section.total))
        )?;

        if section.shown.is_empty() {
            let note = if report.is_orphan {
                "No installation chain found (no installed package requires it any more)"
            } else {
                "No installation chain found"
            };
            writeln!(out, "  {}", self.warning(note))?;
            return Ok(());
        }

        for (number, chain) in section.shown.iter().enumerate() {
            writeln!(out, "  {}. {}", number + 1, self.chain(chain))?;
        }

        if section.has_omitted() {
            let note = match (section.omitted, section.omitted_is_lower_bound) {
                (0, _) => "... more chains may exist (search stopped early)".to_string(),
                (n, true) => format!("... and at least {} more chain(s) not shown", n),
                (n, false) => format!("... and {} more chain(s) not shown", n),
            };
            writeln!(out, "  {}", self.dimmed(&note))?;
        }
        Ok(())
    }

    fn write_list(&self, out: &mut String, title: &str, items: &[String]) -> std::fmt::Result {
        writeln!(out)?;
        writeln!(out, "{}", self.heading(&format!("{} ({})", title, items.len())))?;
        if items.is_empty() {
            writeln!(out, "  {}", self.dimmed(NONE))?;
        } else {
            writeln!(out, "  {}", items.join(", "))?;
        }
        Ok(())
    }

    fn render(&self, report: &PackageReport) -> std::result::Result<String, std::fmt::Error> {
        let mut out = String::new();
        self.write_header(&mut out, report)?;
        if let Some(section) = &report.chains {
            self.write_chains(&mut out, section, report)?;
        }
        if !report.provides.is_empty() {
            self.write_list(&mut out, "Provides", &report.provides)?;
        }
        self.write_list(&mut out, "Depends on", &report.dependencies)?;
        self.write_list(&mut out, "Required by", &report.required_by)?;
        Ok(out)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &PackageReport) -> Result<String> {
        Ok(self.render(report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dependency_report() -> PackageReport {
        PackageReport {
            name: "c".to_string(),
            version: "1.0-1".to_string(),
            description: Some("A library".to_string()),
            install_reason: "dependency".to_string(),
            reason_statement: "Installed as a dependency".to_string(),
            install_date: Some("2023-11-14 22:13:20 UTC".to_string()),
            is_explicit: false,
            chains: Some(ChainSection {
                shown: vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]],
                total: 1,
                omitted: 0,
                omitted_is_lower_bound: false,
            }),
            provides: vec![],
            dependencies: vec!["glibc".to_string()],
            required_by: vec!["b".to_string()],
            is_orphan: false,
        }
    }

    fn format_plain(report: &PackageReport) -> String {
        TextFormatter::new(false).format(report).unwrap()
    }

    #[test]
    fn test_format_header() {
        let output = format_plain(&dependency_report());

        assert!(output.contains("Package:      c 1.0-1"));
        assert!(output.contains("Description:  A library"));
        assert!(output.contains("Reason:       Installed as a dependency"));
        assert!(output.contains("Install Date: 2023-11-14 22:13:20 UTC"));
    }

    #[test]
    fn test_format_chains_root_first() {
        let output = format_plain(&dependency_report());

        assert!(output.contains("Installation chains (1)"));
        assert!(output.contains("  1. a -> b -> c"));
        assert!(!output.contains("more chain"));
    }

    #[test]
    fn test_format_full_lists() {
        let output = format_plain(&dependency_report());

        assert!(output.contains("Depends on (1)\n  glibc"));
        assert!(output.contains("Required by (1)\n  b"));
        assert!(!output.contains("Provides"));
    }

    #[test]
    fn test_format_empty_lists_show_none() {
        let mut report = dependency_report();
        report.dependencies.clear();
        report.required_by.clear();
        let output = format_plain(&report);

        assert!(output.contains("Depends on (0)\n  None"));
        assert!(output.contains("Required by (0)\n  None"));
    }

    #[test]
    fn test_format_omitted_note() {
        let mut report = dependency_report();
        if let Some(section) = report.chains.as_mut() {
            section.total = 9;
            section.omitted = 8;
        }
        assert!(format_plain(&report).contains("... and 8 more chain(s) not shown"));
    }

    #[test]
    fn test_format_omitted_note_lower_bound() {
        let mut report = dependency_report();
        if let Some(section) = report.chains.as_mut() {
            section.omitted = 3;
            section.omitted_is_lower_bound = true;
        }
        assert!(format_plain(&report).contains("... and at least 3 more chain(s) not shown"));
    }

    #[test]
    fn test_format_truncated_without_omitted() {
        let mut report = dependency_report();
        if let Some(section) = report.chains.as_mut() {
            section.omitted_is_lower_bound = true;
        }
        assert!(format_plain(&report).contains("more chains may exist"));
    }

    #[test]
    fn test_format_orphan() {
        let mut report = dependency_report();
        report.required_by.clear();
        report.is_orphan = true;
        report.chains = Some(ChainSection {
            shown: vec![],
            total: 0,
            omitted: 0,
            omitted_is_lower_bound: false,
        });
        let output = format_plain(&report);

        assert!(output.contains("No installation chain found (no installed package requires it any more)"));
    }

    #[test]
    fn test_format_explicit_package_has_no_chain_section() {
        let mut report = dependency_report();
        report.is_explicit = true;
        report.reason_statement = "Explicitly installed".to_string();
        report.chains = None;
        let output = format_plain(&report);

        assert!(output.contains("Explicitly installed"));
        assert!(!output.contains("Installation chains"));
    }

    #[test]
    fn test_format_plain_has_no_escape_codes() {
        assert!(!format_plain(&dependency_report()).contains('\u{1b}'));
    }

    #[test]
    fn test_format_colored_has_escape_codes() {
        let output = TextFormatter::new(true).format(&dependency_report()).unwrap();
        assert!(output.contains('\u{1b}'));
        assert!(output.contains("Installed as a dependency"));
    }
}
