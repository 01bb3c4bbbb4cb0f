use crate::install_analysis::domain::{InstallReason, PackageName, PackageRecord};
use crate::shared::Result;
use chrono::{DateTime, TimeZone, Utc};

/// Sections of a pacman `desc` file that feed a package record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Name,
    Version,
    Description,
    Reason,
    Depends,
    Provides,
    InstallDate,
    Other,
}

impl Section {
    fn from_header(header: &str) -> Self {
        match header {
            "NAME" => Section::Name,
            "VERSION" => Section::Version,
            "DESC" => Section::Description,
            "REASON" => Section::Reason,
            "DEPENDS" => Section::Depends,
            "PROVIDES" => Section::Provides,
            "INSTALLDATE" => Section::InstallDate,
            _ => Section::Other,
        }
    }
}

/// Raw field values collected from a `desc` file before validation
#[derive(Debug, Default)]
struct DescFields {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    reason: Option<String>,
    depends: Vec<String>,
    provides: Vec<String>,
    install_date: Option<String>,
}

/// Parses the content of a pacman local database `desc` file
///
/// The format is a sequence of `%SECTION%` headers, each followed by one
/// value per line. Blank lines are skipped and a section lasts until the
/// next header. Single-valued sections keep their first value.
///
/// # Errors
/// Returns an error if the `%NAME%` section is missing or holds an
/// invalid package name
pub fn parse_desc(content: &str) -> Result<PackageRecord> {
    let mut fields = DescFields::default();
    let mut section: Option<Section> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = section_header(line) {
            section = Some(Section::from_header(header));
            continue;
        }

        match section {
            Some(Section::Name) => set_once(&mut fields.name, line),
            Some(Section::Version) => set_once(&mut fields.version, line),
            Some(Section::Description) => set_once(&mut fields.description, line),
            Some(Section::Reason) => set_once(&mut fields.reason, line),
            Some(Section::InstallDate) => set_once(&mut fields.install_date, line),
            Some(Section::Depends) => fields.depends.push(line.to_string()),
            Some(Section::Provides) => fields.provides.push(line.to_string()),
            Some(Section::Other) | None => {}
        }
    }

    let name = fields
        .name
        .ok_or_else(|| anyhow::anyhow!("missing %NAME% section"))?;
    let name = PackageName::new(name)?;

    Ok(PackageRecord::new(
        name,
        fields.version.unwrap_or_default(),
        InstallReason::from_flag(fields.reason.as_deref()),
    )
    .with_dependencies(fields.depends)
    .with_provides(fields.provides)
    .with_description(fields.description)
    .with_install_date(fields.install_date.as_deref().and_then(parse_install_date)))
}

/// Returns the header name when the line has the `%SECTION%` shape
fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('%')
        .and_then(|rest| rest.strip_suffix('%'))
        .filter(|header| !header.is_empty())
}

fn set_once(slot: &mut Option<String>, value: &str) {
    if slot.is_none() {
        *slot = Some(value.to_string());
    }
}

/// Install dates are unix seconds; anything else is ignored
fn parse_install_date(value: &str) -> Option<DateTime<Utc>> {
    value
        .parse::<i64>()
        .ok()
        .and_then(|seconds| Utc.timestamp_opt(seconds, 0).single())
}
