// KSC reports configuration loader
use crate::domain::report::{Report, ReportsList};
use crate::error::MigrationError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;

const KSC_ROOT_ELEMENT: &str = "ReportsList";

fn root_element(xml: &str) -> Result<String, MigrationError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(MigrationError::InvalidXml("document has no root element".to_string()));
            }
            Ok(_) => continue,
            Err(e) => return Err(MigrationError::InvalidXml(e.to_string())),
        }
    }
}

/// Parse the reports of a KSC configuration document.
pub fn parse_ksc_reports(xml: &str) -> Result<Vec<Report>, MigrationError> {
    let root = root_element(xml)?;
    if root != KSC_ROOT_ELEMENT {
        return Err(MigrationError::NotKscConfiguration { root });
    }

    let list: ReportsList =
        quick_xml::de::from_str(xml).map_err(|e| MigrationError::InvalidXml(e.to_string()))?;
    Ok(list.reports)
}

/// Read and parse a KSC configuration file such as `ksc-performance-reports.xml`.
pub fn load_ksc_reports(path: &Path) -> Result<Vec<Report>, MigrationError> {
    let xml = std::fs::read_to_string(path).map_err(|source| MigrationError::ConfigFile {
        path: path.to_path_buf(),
        source,
    })?;

    let reports = parse_ksc_reports(&xml)?;
    tracing::info!("Loaded {} KSC reports from {}", reports.len(), path.display());
    Ok(reports)
}
