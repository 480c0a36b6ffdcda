use proptest::prelude::*;

use crate::checksum::{self, CHECKSUM_PREFIX};
use crate::{IniBuilder, IniOptions, IniSection};

fn sample_builder(options: IniOptions) -> IniBuilder {
    let mut ini = IniBuilder::new(options).with_header("; Sample\n\n");
    ini.set_group_header(1, "; Group One\n");

    let mut constants = IniSection::constants().with_comment("Globals");
    constants
        .body_mut()
        .add_comment("Number of vertices")
        .add_command("global $mesh_vertex_count = 100");
    ini.add_section(constants, 0).unwrap();

    let mut callback = IniSection::texture_override("Callback", "a1b2c3d4").unwrap();
    callback.body_mut().add_command("match_priority = 0");
    let block = callback.body_mut().add_conditional();
    block
        .add_if_clause("$mod_enabled")
        .unwrap()
        .add_persistent_comment("Draw Body")
        .add_command("drawindexed = 300, 0, 0");
    block.add_else_clause().unwrap().add_command("handling = skip");
    ini.add_section(callback, 1).unwrap();

    ini
}

#[test]
fn test_concrete_scenario() {
    let mut ini = IniBuilder::new(IniOptions::default());
    ini.set_group_header(0, "; Hdr\n");
    let mut section = IniSection::resource("Foo");
    section.body_mut().add_command("type = Buffer");
    ini.add_section(section, 0).unwrap();

    let signed = checksum::sign(&ini.build());
    let (body, trailer) = signed
        .trim_end_matches('\n')
        .rsplit_once('\n')
        .map(|(body, trailer)| (format!("{body}\n"), trailer))
        .unwrap();

    assert!(body.starts_with("; Hdr\n\n[ResourceFoo]\ntype = Buffer\n"));
    let digest = trailer.strip_prefix(CHECKSUM_PREFIX).unwrap();
    assert_eq!(digest.len(), 64);
    assert!(digest
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn test_build_is_idempotent() {
    let ini = sample_builder(IniOptions::default());
    assert_eq!(ini.build(), ini.build());
}

#[test]
fn test_group_registration_order_does_not_matter() {
    let mut ini = IniBuilder::new(IniOptions::default());
    ini.set_group_header(2, "; 2\n");
    ini.set_group_header(0, "; 0\n");
    ini.set_group_header(1, "; 1\n");

    assert_eq!(ini.build(), "; 0\n; 1\n; 2\n");
}

#[test]
fn test_comment_suppression_document_wide() {
    let full = sample_builder(IniOptions::default()).build();
    let stripped = sample_builder(IniOptions {
        suppress_non_persistent_comments: true,
    })
    .build();

    assert_eq!(
        full,
        "; Sample\n\n\
         \n; Globals\n; Number of vertices\nglobal $mesh_vertex_count = 100\n\
         ; Group One\n\
         \n[TextureOverrideCallback]\nhash = a1b2c3d4\nmatch_priority = 0\n\
         if $mod_enabled\n  ; Draw Body\n  drawindexed = 300, 0, 0\nelse\n  handling = skip\nendif\n"
    );
    assert!(!stripped.contains("Globals"));
    assert!(!stripped.contains("Number of vertices"));
    assert!(stripped.contains("  ; Draw Body\n"));
    // Literal group text is never treated as a comment line.
    assert!(stripped.contains("; Group One\n"));
}

#[test]
fn test_persistent_and_plain_comment_order() {
    let build = |suppress| {
        let mut ini = IniBuilder::new(IniOptions {
            suppress_non_persistent_comments: suppress,
        });
        let mut section = IniSection::resource("ModName");
        section
            .body_mut()
            .add_comment("plain")
            .add_persistent_comment("persistent");
        ini.add_section(section, 0).unwrap();
        ini.build()
    };

    assert_eq!(build(false), "\n[ResourceModName]\n; plain\n; persistent\n");
    assert_eq!(build(true), "\n[ResourceModName]\n; persistent\n");
}

#[test]
fn test_conditional_clause_order() {
    let mut ini = IniBuilder::new(IniOptions::default());
    let mut section = IniSection::command_list("Branches");
    let block = section.body_mut().add_conditional();
    block.add_if_clause("$x>0").unwrap().add_command("A");
    block.add_if_clause("$x<0").unwrap().add_command("B");
    block.add_else_clause().unwrap().add_command("C");
    ini.add_section(section, 0).unwrap();

    assert_eq!(
        ini.build(),
        "\n[CommandListBranches]\nif $x>0\n  A\nelse if $x<0\n  B\nelse\n  C\nendif\n"
    );
}

#[test]
fn test_signed_sample_round_trips() {
    let signed = checksum::sign(&sample_builder(IniOptions::default()).build());
    let lines = signed.split_inclusive('\n').collect::<Vec<_>>();

    assert!(!checksum::is_modified(&lines));
}

#[test]
fn test_edit_after_unterminated_footer_is_detected() {
    let mut ini = IniBuilder::new(IniOptions::default());
    let mut section = IniSection::resource("Foo");
    section.body_mut().add_command("type = Buffer");
    ini.add_section(section, 0).unwrap();
    ini.set_group_footer(0, "; end");

    let signed = checksum::sign(&ini.build());
    assert!(signed
        .lines()
        .last()
        .is_some_and(|line| line.starts_with(CHECKSUM_PREFIX)));
    assert!(!checksum::is_text_modified(&signed));

    let edited = signed.replace("type = Buffer", "type = RWBuffr");
    assert!(checksum::is_text_modified(&edited));
}

#[test]
fn test_removing_newline_before_trailer_hides_edits() {
    // Joining the last content line with the trailer leaves no trailer line,
    // which is treated as an unsigned file.
    let signed = checksum::sign("[ResourceFoo]\ntype = Buffer\n");
    let joined = signed.replacen("Buffer\n", "RWBuffer ", 1);

    assert!(!joined.lines().any(|line| line.starts_with(CHECKSUM_PREFIX)));
    assert!(!checksum::is_text_modified(&joined));
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9 =$;\\[\\]_.,-]{0,24}", 1..12)
        .prop_map(|lines| lines.into_iter().map(|line| line + "\n").collect())
}

proptest! {
    #[test]
    fn prop_signed_documents_are_unmodified(text in document()) {
        prop_assert!(!checksum::is_text_modified(&checksum::sign(&text)));
    }

    #[test]
    fn prop_single_character_edit_is_detected(
        text in document(),
        position in any::<prop::sample::Index>(),
        replacement in "[a-zA-Z0-9 =$;_.]",
    ) {
        let signed = checksum::sign(&text);
        // Newlines are left alone: removing the one before the trailer makes the
        // file read as unsigned, see test_removing_newline_before_trailer_hides_edits.
        let editable = text
            .char_indices()
            .filter(|(_, c)| *c != '\n')
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        prop_assume!(!editable.is_empty());

        let at = editable[position.index(editable.len())];
        let original = &signed[at..at + 1];
        prop_assume!(original != replacement);

        let mut edited = signed.clone();
        edited.replace_range(at..at + 1, &replacement);
        prop_assert!(checksum::is_text_modified(&edited));
    }

    #[test]
    fn prop_text_without_trailer_is_unmodified(text in document()) {
        prop_assume!(!text.contains(CHECKSUM_PREFIX));
        prop_assert!(!checksum::is_text_modified(&text));
    }
}
