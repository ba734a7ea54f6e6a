//! Turning a validated request into an outcome.

use crate::allocation::IdentifierAllocator;
use crate::error::AllocationError;
use crate::model::{
    ExtractedRequest, InventoryRecord, NOT_AVAILABLE, UNKNOWN_ADVISOR, UNKNOWN_DEVICE,
    UNKNOWN_MAKE, UNKNOWN_MODEL,
};
use serde::{Deserialize, Serialize};
use std::fmt;

const CLARIFICATION_HEADER: &str = "Dear Client,\n\nWe received your request, but we noticed that some necessary information is missing or requires clarification. Could you please provide the following details?\n\n";
const CLARIFICATION_FOOTER: &str = "\nOnce we have this information, we can proceed with processing your request.\n\nThank you for your understanding.\n\nBest regards,\nYour IT Support Team";

/// Reply for a complete request that could not be committed automatically.
pub const ACKNOWLEDGMENT: &str = "Thank you for your request. We are processing your order and will get back to you with the next steps shortly.\n\nBest regards,\nYour IT Support Team";

/// Fields a requester must supply, in the order they are asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequiredField {
    Department,
    Advisor,
    Make,
    Model,
}

impl RequiredField {
    pub const ALL: [RequiredField; 4] = [
        RequiredField::Department,
        RequiredField::Advisor,
        RequiredField::Make,
        RequiredField::Model,
    ];

    fn is_present(self, request: &ExtractedRequest) -> bool {
        let value = match self {
            RequiredField::Department => &request.department,
            RequiredField::Advisor => &request.advisor,
            RequiredField::Make => &request.make,
            RequiredField::Model => &request.model,
        };
        value.is_some()
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequiredField::Department => "Department",
            RequiredField::Advisor => "Advisor",
            RequiredField::Make => "Make",
            RequiredField::Model => "Model",
        };
        f.write_str(name)
    }
}

/// Result of resolving one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A new row to append to the inventory.
    Commit(InventoryRecord),
    /// Message asking the requester for missing fields.
    ClarificationNeeded(String),
    /// Message confirming receipt of a complete but unresolved request.
    ProcessingAcknowledged(String),
}

impl Outcome {
    /// Message for the requester, if this outcome carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Commit(_) => None,
            Outcome::ClarificationNeeded(m) | Outcome::ProcessingAcknowledged(m) => Some(m),
        }
    }

    pub fn record(&self) -> Option<&InventoryRecord> {
        match self {
            Outcome::Commit(record) => Some(record),
            _ => None,
        }
    }
}

/// Required fields the request lacks, in asking order.
pub fn missing_fields(request: &ExtractedRequest) -> Vec<RequiredField> {
    RequiredField::ALL
        .into_iter()
        .filter(|field| !field.is_present(request))
        .collect()
}

pub fn clarification_message(missing: &[RequiredField]) -> String {
    let mut message = String::from(CLARIFICATION_HEADER);
    for field in missing {
        message.push_str(&format!("- {}\n", field));
    }
    message.push_str(CLARIFICATION_FOOTER);
    message
}

/// Build the inventory row, substituting sentinels for absent fields.
pub fn build_record(
    request: &ExtractedRequest,
    asset_tag: String,
    purchase_order: String,
) -> InventoryRecord {
    let or = |value: &Option<String>, sentinel: &str| {
        value.clone().unwrap_or_else(|| sentinel.to_string())
    };

    InventoryRecord {
        department: or(&request.department, NOT_AVAILABLE),
        room: or(&request.room, NOT_AVAILABLE),
        asset_tag,
        device_name: or(&request.device_name, UNKNOWN_DEVICE),
        advisor: or(&request.advisor, UNKNOWN_ADVISOR),
        make: or(&request.make, UNKNOWN_MAKE),
        model: or(&request.model, UNKNOWN_MODEL),
        purchase_order,
    }
}

/// Decide the outcome for a validated request.
///
/// Identifiers are allocated only on the commit path.
pub fn resolve<A: IdentifierAllocator + ?Sized>(
    request: &ExtractedRequest,
    allocator: &A,
) -> Result<Outcome, AllocationError> {
    if request.device_valid && request.device_name.is_some() {
        let ids = allocator.allocate()?;
        return Ok(Outcome::Commit(build_record(
            request,
            ids.asset_tag,
            ids.purchase_order,
        )));
    }

    let missing = missing_fields(request);
    if missing.is_empty() {
        Ok(Outcome::ProcessingAcknowledged(ACKNOWLEDGMENT.to_string()))
    } else {
        Ok(Outcome::ClarificationNeeded(clarification_message(&missing)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::Identifiers;
    use std::cell::Cell;

    struct CountingAllocator {
        calls: Cell<usize>,
    }

    impl CountingAllocator {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl IdentifierAllocator for CountingAllocator {
        fn allocate(&self) -> Result<Identifiers, AllocationError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Identifiers {
                asset_tag: "[0002]".into(),
                purchase_order: "PO1001".into(),
            })
        }
    }

    struct BrokenAllocator;

    impl IdentifierAllocator for BrokenAllocator {
        fn allocate(&self) -> Result<Identifiers, AllocationError> {
            Err(AllocationError::MalformedPurchaseOrder {
                value: "garbage".into(),
            })
        }
    }

    fn complete() -> ExtractedRequest {
        ExtractedRequest {
            department: Some("HR".into()),
            room: Some("Room 101".into()),
            advisor: Some("John Doe".into()),
            device_name: Some("laptop".into()),
            make: Some("Dell".into()),
            model: Some("Latitude".into()),
            device_valid: true,
            ..Default::default()
        }
    }

    fn bullets(message: &str) -> Vec<&str> {
        message.lines().filter(|l| l.starts_with("- ")).collect()
    }

    #[test]
    fn test_valid_named_device_commits() {
        let allocator = CountingAllocator::new();
        let outcome = resolve(&complete(), &allocator).unwrap();
        let record = outcome.record().expect("commit");
        assert_eq!(record.asset_tag, "[0002]");
        assert_eq!(record.purchase_order, "PO1001");
        assert_eq!(record.room, "Room 101");
        assert_eq!(allocator.calls.get(), 1);
    }

    #[test]
    fn test_commit_fills_sentinels() {
        let mut req = complete();
        req.room = None;
        req.advisor = None;
        let outcome = resolve(&req, &CountingAllocator::new()).unwrap();
        let record = outcome.record().unwrap();
        assert_eq!(record.room, NOT_AVAILABLE);
        assert_eq!(record.advisor, UNKNOWN_ADVISOR);
    }

    #[test]
    fn test_missing_advisor_only_gets_one_bullet() {
        let mut req = complete();
        req.advisor = None;
        req.device_valid = false;
        let allocator = CountingAllocator::new();
        let outcome = resolve(&req, &allocator).unwrap();
        match &outcome {
            Outcome::ClarificationNeeded(m) => assert_eq!(bullets(m), vec!["- Advisor"]),
            other => panic!("expected clarification, got {:?}", other),
        }
        assert_eq!(allocator.calls.get(), 0);
    }

    #[test]
    fn test_missing_fields_keep_fixed_order() {
        let req = ExtractedRequest {
            advisor: Some("John Doe".into()),
            ..Default::default()
        };
        assert_eq!(
            missing_fields(&req),
            vec![
                RequiredField::Department,
                RequiredField::Make,
                RequiredField::Model
            ]
        );
        let message = clarification_message(&missing_fields(&req));
        assert_eq!(bullets(&message), vec!["- Department", "- Make", "- Model"]);
        assert!(message.starts_with("Dear Client,"));
    }

    #[test]
    fn test_complete_but_unnamed_device_is_acknowledged() {
        let mut req = complete();
        req.device_name = None;
        let allocator = CountingAllocator::new();
        let outcome = resolve(&req, &allocator).unwrap();
        assert_eq!(outcome, Outcome::ProcessingAcknowledged(ACKNOWLEDGMENT.to_string()));
        assert_eq!(allocator.calls.get(), 0);
    }

    #[test]
    fn test_complete_but_invalid_device_is_acknowledged() {
        let mut req = complete();
        req.device_valid = false;
        let outcome = resolve(&req, &CountingAllocator::new()).unwrap();
        assert!(matches!(outcome, Outcome::ProcessingAcknowledged(_)));
    }

    #[test]
    fn test_allocation_failure_propagates() {
        assert!(resolve(&complete(), &BrokenAllocator).is_err());
    }

    #[test]
    fn test_unresolved_request_never_touches_allocator() {
        let req = ExtractedRequest::default();
        assert!(matches!(
            resolve(&req, &BrokenAllocator),
            Ok(Outcome::ClarificationNeeded(_))
        ));
    }
}
