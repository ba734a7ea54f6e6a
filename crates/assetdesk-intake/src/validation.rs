//! Catalog validation and nearest-device suggestion.
//!
//! Validation is a partial-constraint match: make and model must equal a
//! catalog entry exactly, and each hardware attribute either is unspecified
//! or equals the entry's. Suggestion scoring counts matching make, processor,
//! RAM, storage, and OS; model is deliberately not scored.

use crate::model::{Catalog, DeviceSpec, ExtractedRequest};

/// Reply when no catalog entry shares anything with the request.
pub const NO_SIMILAR_DEVICE: &str = "No similar device found in the database.";

/// Does the request name an approved device?
pub fn validate(request: &ExtractedRequest, catalog: &Catalog) -> bool {
    let (Some(make), Some(model)) = (request.make.as_deref(), request.model.as_deref()) else {
        return false;
    };

    catalog.iter().any(|device| {
        device.make == make
            && device.model == model
            && unset_or_equal(&request.processor, &device.processor)
            && unset_or_equal(&request.ram, &device.ram)
            && unset_or_equal(&request.storage, &device.storage)
            && unset_or_equal(&request.operating_system, &device.operating_system)
    })
}

fn unset_or_equal(wanted: &Option<String>, offered: &str) -> bool {
    wanted.as_deref().map_or(true, |w| w == offered)
}

fn same(wanted: &Option<String>, offered: &str) -> bool {
    wanted.as_deref() == Some(offered)
}

/// Similarity in `0..=5` between a request and one catalog entry.
pub fn similarity(request: &ExtractedRequest, device: &DeviceSpec) -> u8 {
    [
        same(&request.make, &device.make),
        same(&request.processor, &device.processor),
        same(&request.ram, &device.ram),
        same(&request.storage, &device.storage),
        same(&request.operating_system, &device.operating_system),
    ]
    .into_iter()
    .map(u8::from)
    .sum()
}

/// Highest-scoring entry; ties keep the earlier one. `None` when every score is 0.
pub fn best_match<'a>(request: &ExtractedRequest, catalog: &'a Catalog) -> Option<&'a DeviceSpec> {
    let mut best: Option<&DeviceSpec> = None;
    let mut best_score = 0u8;

    for device in catalog {
        let score = similarity(request, device);
        if score > best_score {
            best_score = score;
            best = Some(device);
        }
    }

    best
}

/// Suggestion sentence for an unapproved request.
pub fn suggest(request: &ExtractedRequest, catalog: &Catalog) -> String {
    match best_match(request, catalog) {
        Some(device) => format!(
            "Suggested Device: {} {} with {}, {} RAM, {} Storage, {}",
            device.make,
            device.model,
            device.processor,
            device.ram,
            device.storage,
            device.operating_system
        ),
        None => NO_SIMILAR_DEVICE.to_string(),
    }
}

/// Run validation and fill in `device_valid` / `suggestion`.
///
/// A request that does not name both make and model is never scored.
pub fn check_device(request: &mut ExtractedRequest, catalog: &Catalog) {
    request.device_valid = validate(request, catalog);
    request.suggestion = if !request.device_valid && request.names_device() {
        Some(suggest(request, catalog))
    } else {
        None
    };

    tracing::debug!(
        valid = request.device_valid,
        suggestion = ?request.suggestion,
        catalog_entries = catalog.len(),
        "validated device"
    );
}
