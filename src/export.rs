//! Data Export
//!
//! Client-side JSON export of the loaded records via a temporary download
//! link.

use wasm_bindgen::JsCast;

use crate::state::store::StepRecord;

/// Download filename for a given export date.
pub fn export_filename(date: chrono::NaiveDate) -> String {
    format!("stepcounter-export-{}.json", date.format("%Y-%m-%d"))
}

/// Serialize the full record list to indented JSON and trigger a browser
/// download named with today's date. Returns false when serialization or the
/// DOM dance fails.
pub fn export_records(records: &[StepRecord]) -> bool {
    let Ok(contents) = serde_json::to_string_pretty(records) else {
        return false;
    };

    let filename = export_filename(chrono::Local::now().date_naive());
    trigger_download(&filename, &contents)
}

fn trigger_download(filename: &str, contents: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };

    let parts = js_sys::Array::of1(&contents.into());
    let Ok(blob) = web_sys::Blob::new_with_str_sequence(&parts) else {
        return false;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return false;
    };

    let clicked = document
        .create_element("a")
        .ok()
        .and_then(|a| {
            a.set_attribute("href", &url).ok()?;
            a.set_attribute("download", filename).ok()?;
            a.dyn_ref::<web_sys::HtmlElement>()?.click();
            Some(())
        })
        .is_some();

    let _ = web_sys::Url::revoke_object_url(&url);
    clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_is_dated() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();
        assert_eq!(export_filename(date), "stepcounter-export-2025-08-20.json");
    }

    #[test]
    fn test_records_serialize_pretty() {
        let records = vec![StepRecord {
            step_count: 42,
            client_timestamp: "2025-08-20T09:30:00".to_string(),
            server_timestamp: "2025-08-20T09:30:02".to_string(),
        }];

        let json = serde_json::to_string_pretty(&records).unwrap();
        assert!(json.contains("\"step_count\": 42"));
        // Indented, one field per line
        assert!(json.lines().count() > 3);
    }
}
