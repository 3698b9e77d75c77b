//! The 511-character renewal record layout.
//!
//! Every field occupies a fixed `(offset, len)` slot. Slots are contiguous,
//! start at column 0, and together cover exactly [`RECORD_WIDTH`] columns.
//! Each entry also records where its synthetic value comes from, so the
//! encoder is a single loop over [`FIELDS`].

/// Width of one record, excluding the line terminator.
pub const RECORD_WIDTH: usize = 511;

/// How a field's value is derived from the record index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// The same text for every record.
    Constant(&'static str),
    /// Content-less padding.
    Blank,
    /// A fixed prefix followed by the decimal index, e.g. `IPR7`.
    Prefixed(&'static str),
    /// The decimal index on its own.
    Index,
    /// `Y` for even indices, `N` for odd.
    EvenFlag,
    /// `(10 + index) % 99`.
    AnnuityTerm,
    /// `2025MMDD` with month `(index % 12) + 1` and day `(index % 28) + 1`.
    RenewalDate,
    /// `1000 + index * 10`.
    EventAmount,
}

impl FieldSource {
    /// Compute the unpadded value for `index`.
    pub fn value(&self, index: u32) -> String {
        match *self {
            FieldSource::Constant(text) => text.to_string(),
            FieldSource::Blank => String::new(),
            FieldSource::Prefixed(prefix) => format!("{prefix}{index}"),
            FieldSource::Index => index.to_string(),
            FieldSource::EvenFlag => {
                if index % 2 == 0 {
                    "Y".to_string()
                } else {
                    "N".to_string()
                }
            }
            FieldSource::AnnuityTerm => ((10 + u64::from(index)) % 99).to_string(),
            FieldSource::RenewalDate => {
                format!("2025{:02}{:02}", index % 12 + 1, index % 28 + 1)
            }
            FieldSource::EventAmount => (1000 + u64::from(index) * 10).to_string(),
        }
    }
}

/// One slot in the record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub len: usize,
    pub source: FieldSource,
}

impl FieldSpec {
    const fn new(name: &'static str, offset: usize, len: usize, source: FieldSource) -> Self {
        Self {
            name,
            offset,
            len,
            source,
        }
    }

    /// Column one past the end of this slot.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn is_filler(&self) -> bool {
        self.source == FieldSource::Blank
    }
}

use FieldSource::*;

/// The record layout, in column order.
pub const FIELDS: [FieldSpec; 27] = [
    FieldSpec::new("eventCode", 0, 2, Constant("EC")),
    FieldSpec::new("filler_2_16", 2, 14, Blank),
    FieldSpec::new("iprUniqueRefNumber", 16, 7, Prefixed("IPR")),
    FieldSpec::new("ownerName", 23, 35, Prefixed("OWNER_NAME_")),
    FieldSpec::new("accountNumber", 58, 7, Prefixed("ACC")),
    FieldSpec::new("caseCode", 65, 15, Prefixed("CASE")),
    FieldSpec::new("fileNumber", 80, 15, Prefixed("FILE")),
    FieldSpec::new("agentCaseCode", 95, 15, Prefixed("AGENT")),
    FieldSpec::new("clientRef", 110, 35, Prefixed("CLIENT_REF_")),
    FieldSpec::new("clientCode", 145, 15, Prefixed("CLI_CODE_")),
    FieldSpec::new("countryCode", 160, 2, Constant("US")),
    FieldSpec::new("renewalTypeCode", 162, 2, Constant("RT")),
    FieldSpec::new("renewalTypeName", 164, 16, Prefixed("RENEW_TYPE_")),
    FieldSpec::new("registrationNumber", 180, 15, Prefixed("REG")),
    FieldSpec::new("divisionCode", 195, 6, Prefixed("DIV")),
    FieldSpec::new("linkedFlag", 201, 1, EvenFlag),
    FieldSpec::new("annuityTerm", 202, 2, AnnuityTerm),
    FieldSpec::new("filler_204_212", 204, 8, Blank),
    FieldSpec::new("nextRenewalDateString", 212, 8, RenewalDate),
    FieldSpec::new("filler_220_228", 220, 8, Blank),
    FieldSpec::new("eventAmount", 228, 15, EventAmount),
    FieldSpec::new("currency", 243, 3, Constant("USD")),
    FieldSpec::new("invoiceNumber", 246, 7, Prefixed("INV")),
    FieldSpec::new("invoiceItemNumber", 253, 4, Index),
    FieldSpec::new("filler_257_265", 257, 8, Blank),
    FieldSpec::new("eventNarrative", 265, 200, Prefixed("EventNarrative for record ")),
    FieldSpec::new("filler_465_511", 465, 46, Blank),
];

/// Look up a field by its layout name.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::FieldSource::*;
    use super::*;

    #[test]
    fn test_layout_is_contiguous() {
        let mut expected_offset = 0;
        for f in &FIELDS {
            assert_eq!(f.offset, expected_offset, "gap or overlap at {}", f.name);
            assert!(f.len > 0, "{} has zero width", f.name);
            expected_offset = f.end();
        }
        assert_eq!(expected_offset, RECORD_WIDTH);
    }

    #[test]
    fn test_widths_sum_to_record_width() {
        let total: usize = FIELDS.iter().map(|f| f.len).sum();
        assert_eq!(total, RECORD_WIDTH);
    }

    #[test]
    fn test_field_names_unique() {
        for (i, a) in FIELDS.iter().enumerate() {
            for b in &FIELDS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_field_lookup() {
        let f = field("eventAmount").unwrap();
        assert_eq!((f.offset, f.len), (228, 15));
        assert!(field("noSuchField").is_none());
        assert!(field("filler_465_511").unwrap().is_filler());
    }

    #[test]
    fn test_even_flag() {
        assert_eq!(EvenFlag.value(2), "Y");
        assert_eq!(EvenFlag.value(3), "N");
    }

    #[test]
    fn test_renewal_date() {
        assert_eq!(RenewalDate.value(1), "20250202");
        assert_eq!(RenewalDate.value(11), "20251212");
        assert_eq!(RenewalDate.value(12), "20250113");
        assert_eq!(RenewalDate.value(27), "20250428");
        assert_eq!(RenewalDate.value(28), "20250501");
    }

    #[test]
    fn test_annuity_term_wraps() {
        assert_eq!(AnnuityTerm.value(1), "11");
        assert_eq!(AnnuityTerm.value(50), "60");
        assert_eq!(AnnuityTerm.value(89), "0");
    }

    #[test]
    fn test_event_amount() {
        assert_eq!(EventAmount.value(5), "1050");
        assert_eq!(EventAmount.value(50), "1500");
    }

    #[test]
    fn test_prefixed_and_index() {
        assert_eq!(Prefixed("IPR").value(42), "IPR42");
        assert_eq!(Index.value(42), "42");
        assert_eq!(Constant("USD").value(42), "USD");
        assert_eq!(Blank.value(42), "");
    }
}
