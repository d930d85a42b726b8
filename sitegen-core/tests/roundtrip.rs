//! Roundtrip tests for the draft serialization boundary.
//!
//! Each `#[case]` is isolated — no shared state.

use rstest::rstest;
use sitegen_core::{
    draft::{from_blob, to_blob, SiteDraft},
    types::{SiteDescriptor, SiteKind},
};

fn empty_draft() -> SiteDraft {
    SiteDraft::new(SiteKind::Landing, SiteDescriptor::new())
}

fn landing_draft() -> SiteDraft {
    SiteDraft::new(
        SiteKind::Landing,
        SiteDescriptor::new()
            .with("name", "My Cool Site")
            .with("description", "What your website is about...")
            .with("color", "#f0f0f0"),
    )
}

fn profile_draft() -> SiteDraft {
    SiteDraft::new(
        SiteKind::Profile,
        SiteDescriptor::new()
            .with("title", "Ada Lovelace")
            .with("bio", "First programmer")
            .with("themeColor", "rgb(10, 20, 30)"),
    )
}

fn hostile_draft() -> SiteDraft {
    SiteDraft::new(
        SiteKind::Landing,
        SiteDescriptor::new()
            .with("name", "</title><script>alert(1)</script>")
            .with("description", "multi\nline: value # not a comment\n---\n")
            .with("color", "\"; } body { display:none")
            .with("日本語", "한국어・العربية 🚀"),
    )
}

#[rstest]
#[case("empty", empty_draft())]
#[case("landing", landing_draft())]
#[case("profile", profile_draft())]
#[case("hostile_strings", hostile_draft())]
fn draft_roundtrip(#[case] label: &str, #[case] draft: SiteDraft) {
    let blob = to_blob(&draft).unwrap_or_else(|e| panic!("[{label}] serialize failed: {e}"));
    let back = from_blob(&blob).unwrap_or_else(|e| panic!("[{label}] deserialize failed: {e}"));
    assert_eq!(draft.kind, back.kind, "[{label}] kind");
    assert_eq!(draft.fields, back.fields, "[{label}] fields");
    assert_eq!(draft.updated_at, back.updated_at, "[{label}] updated_at");
}

#[rstest]
#[case(SiteKind::Landing)]
#[case(SiteKind::Profile)]
fn site_kind_roundtrip(#[case] kind: SiteKind) {
    let yaml = serde_yaml::to_string(&kind).expect("serialize");
    let back: SiteKind = serde_yaml::from_str(&yaml).expect("deserialize");
    assert_eq!(kind, back);
    assert_eq!(yaml.trim(), kind.to_string());
}
