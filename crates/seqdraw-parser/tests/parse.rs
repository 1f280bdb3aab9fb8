use proptest::prelude::*;
use seqdraw_parser::{
    TokenKind,
    ast::{ActionDeclaration, ActorDeclaration, Arrow, Statement},
    error::ErrorCode,
    highlight, parse, scan,
};

#[test]
fn test_string_token_covers_content() {
    let scan = scan("\"12345\"");
    let tokens = scan.tokens();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind(), TokenKind::String);
    assert_eq!(tokens[0].start(), 1);
    assert_eq!(tokens[0].end(), 6);
    assert_eq!(tokens[1].kind(), TokenKind::Eof);
}

#[test]
fn test_keyword_spans_whole_input() {
    let keyword = scan("actor");
    let actor = keyword.tokens()[0];

    assert_eq!(actor.kind(), TokenKind::Actor);
    assert_eq!((actor.start(), actor.end()), (0, 5));

    let identifier = scan("a123");
    assert_eq!(identifier.tokens()[0].kind(), TokenKind::Identifier);
    assert_eq!(identifier.tokens().len(), 2);
}

#[test]
fn test_actor_declaration() {
    let program = parse("actor u = \"string\";");

    assert!(!program.has_errors());
    assert_eq!(
        program.statements(),
        &[Statement::Actor(ActorDeclaration::new("u", "string"))]
    );
}

#[test]
fn test_action_declaration() {
    let program = parse("action A -> B = \"perform some action\";");

    assert!(!program.has_errors());
    assert_eq!(
        program.statements(),
        &[Statement::Action(ActionDeclaration::new(
            "A",
            Arrow::Right,
            "B",
            "perform some action"
        ))]
    );
}

#[test]
fn test_forward_progress_after_missing_identifier() {
    let source = r#"action -> B = "somestring";
action A -> B = "somestring";"#;

    let program = parse(source);

    assert_eq!(
        program.statements(),
        &[Statement::Action(ActionDeclaration::new(
            "A",
            Arrow::Right,
            "B",
            "somestring"
        ))]
    );
    assert_eq!(program.diagnostics().len(), 1);

    let diagnostic = &program.diagnostics()[0];
    assert_eq!(diagnostic.code(), Some(ErrorCode::E100));
    assert_eq!(diagnostic.line(), Some(1));
    assert_eq!(diagnostic.message(), "expected actor name, found `->`");
}

#[test]
fn test_missing_identifier_alone() {
    let program = parse("action -> B = \"x\";");

    assert!(program.statements().is_empty());
    assert!(program.has_errors());
}

#[test]
fn test_scan_errors_come_first() {
    let source = "actor a = \"A\";\nactor = \"B\";\nactor c = \"C\" %\n";
    let program = parse(source);

    let codes: Vec<_> = program
        .diagnostics()
        .iter()
        .map(|diagnostic| diagnostic.code())
        .collect();
    assert_eq!(
        codes,
        [
            Some(ErrorCode::E002),
            Some(ErrorCode::E100),
            Some(ErrorCode::E100),
        ]
    );
    assert_eq!(program.statements().len(), 1);
}

#[test]
fn test_full_program() {
    let source = r#"
        actor client = "Client";
        actor server = "Server";
        actor db = "Database";

        action client -> server = "GET /users";
        action server -> db = "SELECT * FROM users";
        action server <- db = "rows";
        action client <- server = "200 OK";
    "#;

    let statements = parse(source).into_result().expect("Failed to parse");

    assert_eq!(statements.len(), 7);
    match &statements[5] {
        Statement::Action(action) => {
            assert_eq!(action.direction, Arrow::Left);
            assert_eq!(action.endpoints(), ("db", "server"));
            assert_eq!(action.value, "rows");
        }
        other => panic!("Expected action, got {other:?}"),
    }
}

#[test]
fn test_highlight_roundtrips_plain_source() {
    let source = "actor a = \"A\";";
    let html = highlight(source, scan(source).tokens());

    let stripped = html
        .split('<')
        .map(|part| part.split_once('>').map_or(part, |(_, text)| text))
        .collect::<String>()
        .replace("&quot;", "\"");
    assert_eq!(stripped, source);
}

proptest! {
    #[test]
    fn prop_scan_ends_with_single_eof(source in "\\PC{0,200}") {
        let scan = scan(&source);
        let tokens = scan.tokens();

        prop_assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::Eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind() == TokenKind::Eof).count(), 1);
        prop_assert_eq!(tokens.last().map(|t| t.start()), Some(source.len()));

        for pair in tokens.windows(2) {
            prop_assert!(pair[0].start() <= pair[1].start());
        }
        for token in tokens {
            prop_assert!(token.start() <= token.end());
            prop_assert!(token.end() <= source.len());
        }
    }

    #[test]
    fn prop_parse_terminates_on_token_soup(
        parts in prop::collection::vec(
            prop::sample::select(vec![
                "actor", "action", "a", "b", "=", "\"x\"", ";", "->", "<-", "(", ")", "\n", "%", "\"",
            ]),
            0..60,
        )
    ) {
        let source = parts.join(" ");
        let program = parse(&source);

        let statements = program.statements().len();
        prop_assert!(statements + program.diagnostics().len() <= parts.len() + 1);
    }
}
