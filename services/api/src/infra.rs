use listing_wizard::wizard::forms::MediaRef;
use listing_wizard::wizard::{PropertyType, RoleType};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_property_type(raw: &str) -> Result<PropertyType, String> {
    PropertyType::parse(raw).ok_or_else(|| {
        format!("unknown property type '{raw}' (expected single-house, apartments or condominiums)")
    })
}

pub(crate) fn parse_role_type(raw: &str) -> Result<RoleType, String> {
    RoleType::parse(raw).ok_or_else(|| {
        format!("unknown role '{raw}' (expected landlord, realtor or property-management)")
    })
}

/// Describes a local file the way the upload inputs would report it.
pub(crate) fn media_from_path(path: &Path) -> std::io::Result<MediaRef> {
    let metadata = std::fs::metadata(path)?;
    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(MediaRef::new(file_name, content_type, metadata.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_selectors() {
        assert_eq!(parse_property_type("condominiums"), Ok(PropertyType::Condominiums));
        assert_eq!(parse_role_type("realtor"), Ok(RoleType::Realtor));
        assert!(parse_property_type("castle").is_err());
    }

    #[test]
    fn media_from_path_guesses_content_type() {
        let path = std::env::temp_dir().join("listing-wizard-cover-test.png");
        std::fs::write(&path, [0u8; 16]).expect("temp file written");

        let media = media_from_path(&path).expect("metadata readable");
        assert_eq!(media.content_type, "image/png");
        assert_eq!(media.size_bytes, 16);
        assert!(media.is_photo());

        std::fs::remove_file(&path).ok();
    }
}
