//! Document kinds and the capability flags they carry.
//!
//! Which optional associations a document supports is a fact of its kind,
//! fixed at construction, never a runtime property of an instance.

use failure::Fail;
use std::fmt;

bitflags! {
    /// Capabilities control which optional associations a document kind
    /// carries.
    pub struct CapabilityBits: u32 {
        /// Documents of this kind can be tagged with topics.
        const TOPICS = 0x00000001;
        /// Documents of this kind can be associated with ministerial roles.
        const MINISTERS = 0x00000002;
        /// Documents of this kind can carry an attachment.
        const ATTACHMENT = 0x00000004;
        /// Documents of this kind own supporting documents.
        const SUPPORTING_DOCUMENTS = 0x00000008;
        /// Documents of this kind can list nations they do not apply to.
        const INAPPLICABLE_NATIONS = 0x00000010;
        /// Documents of this kind declare national applicability.
        const NATIONAL_APPLICABILITY = 0x00000020;
    }
}

impl CapabilityBits {
    /// Verify that all required capabilities are present.
    ///
    /// This is the same check as `self.contains(capabilities)`, but returns
    /// a typed error naming the missing flags.
    pub fn require(&self, capabilities: CapabilityBits)
    -> Result<(), MissingCapability> {
        if self.contains(capabilities) {
            Ok(())
        } else {
            Err(MissingCapability(capabilities - *self))
        }
    }
}

pub trait Capability {
    /// Capabilities are stored as bit-flags, and this field is a mask of
    /// bits corresponding to this capability (or combination of
    /// capabilities).
    fn bits() -> CapabilityBits;
}

macro_rules! capability {
    (
        $name:ident = $value:expr
    ) => {
        pub struct $name;

        impl Capability for $name {
            #[inline]
            fn bits() -> CapabilityBits {
                $value
            }
        }
    };
}

capability!(Topics = CapabilityBits::TOPICS);
capability!(Ministers = CapabilityBits::MINISTERS);
capability!(Attachments = CapabilityBits::ATTACHMENT);
capability!(SupportingDocuments = CapabilityBits::SUPPORTING_DOCUMENTS);
capability!(InapplicableNations = CapabilityBits::INAPPLICABLE_NATIONS);
capability!(NationalApplicability = CapabilityBits::NATIONAL_APPLICABILITY);

#[derive(Debug, Fail)]
#[fail(display = "Missing required capabilities: {:?}", _0)]
pub struct MissingCapability(pub CapabilityBits);

/// Concrete kind of a document.
///
/// The kind determines the capability flags and with them the shape of the
/// aggregate (see [`CapabilityBits`]).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    DetailedGuide,
    CaseStudy,
    Publication,
    NewsArticle,
    Speech,
}

impl DocumentKind {
    /// Fixed capability set of this kind.
    pub fn capabilities(self) -> CapabilityBits {
        match self {
            DocumentKind::DetailedGuide =>
                CapabilityBits::TOPICS
                | CapabilityBits::ATTACHMENT
                | CapabilityBits::SUPPORTING_DOCUMENTS
                | CapabilityBits::INAPPLICABLE_NATIONS
                | CapabilityBits::NATIONAL_APPLICABILITY,
            DocumentKind::CaseStudy => CapabilityBits::TOPICS,
            DocumentKind::Publication =>
                CapabilityBits::MINISTERS
                | CapabilityBits::ATTACHMENT
                | CapabilityBits::NATIONAL_APPLICABILITY,
            DocumentKind::NewsArticle =>
                CapabilityBits::TOPICS | CapabilityBits::MINISTERS,
            DocumentKind::Speech => CapabilityBits::MINISTERS,
        }
    }

    /// Does this kind carry all of the given capabilities?
    pub fn supports(self, capabilities: CapabilityBits) -> bool {
        self.capabilities().contains(capabilities)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(match *self {
            DocumentKind::DetailedGuide => "detailed-guide",
            DocumentKind::CaseStudy => "case-study",
            DocumentKind::Publication => "publication",
            DocumentKind::NewsArticle => "news-article",
            DocumentKind::Speech => "speech",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_reports_missing_bits() {
        let caps = DocumentKind::Speech.capabilities();
        assert!(caps.require(CapabilityBits::MINISTERS).is_ok());

        let err = caps.require(CapabilityBits::TOPICS).unwrap_err();
        assert_eq!(err.0, CapabilityBits::TOPICS);
    }

    #[test]
    fn kinds_without_supporting_documents() {
        assert!(DocumentKind::DetailedGuide
            .supports(CapabilityBits::SUPPORTING_DOCUMENTS));
        assert!(!DocumentKind::CaseStudy
            .supports(CapabilityBits::SUPPORTING_DOCUMENTS));
        assert!(!DocumentKind::Speech
            .supports(CapabilityBits::SUPPORTING_DOCUMENTS));
    }

    #[test]
    fn capability_markers_combine() {
        assert_eq!(Topics::bits(), CapabilityBits::TOPICS);
        assert_eq!(
            <(Topics, Ministers)>::bits(),
            CapabilityBits::TOPICS | CapabilityBits::MINISTERS,
        );
    }
}

macro_rules! impl_capabilities {
    {
        $( ($($name:ident),+) );+ $(;)*
    } => {
        $(
            impl<$($name),+> Capability for ($($name),+)
            where
                $($name: Capability,)+
            {
                #[inline]
                fn bits() -> CapabilityBits {
                    $($name::bits())|+
                }
            }
        )+
    };
}

impl_capabilities! {
    (A, B);
    (A, B, C);
}
