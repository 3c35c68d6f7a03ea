use voicectx_core::config::ServerConfig;
use voicectx_core::editor::CommandHandler;
use voicectx_core::error::Error;
use voicectx_core::text::SymbolSpec;

use crate::common::test_utils::{
    config_fixture_path, document_fixture_path, documents_dir, init_tracing,
};

fn workspace_handler() -> CommandHandler {
    let mut handler = CommandHandler::new();
    handler.set_workspace_roots(vec![documents_dir()]);
    handler
}

fn symbol(name: &str, start: usize, end: usize, children: Vec<SymbolSpec>) -> SymbolSpec {
    SymbolSpec {
        name: name.to_string(),
        kind: "function".to_string(),
        start_offset: start,
        end_offset: end,
        children,
    }
}

#[tokio::test]
async fn test_open_fixture_from_disk() {
    let mut handler = workspace_handler();
    let path = document_fixture_path("sample.py");

    let info = handler
        .handle_open_document(path.to_string_lossy().into_owned(), None)
        .await
        .unwrap();

    assert_eq!(info.language_id, "python");
    assert_eq!(info.line_count, 5);
    assert_eq!(info.length, 77);
    assert_eq!(info.version, 1);

    let cursor = handler.handle_cursor_position().unwrap();
    assert_eq!((cursor.line, cursor.column, cursor.offset), (0, 0, 0));
}

#[tokio::test]
async fn test_open_outside_workspace_rejected() {
    let mut handler = workspace_handler();
    let path = config_fixture_path("minimal.toml");

    let result = handler
        .handle_open_document(path.to_string_lossy().into_owned(), None)
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::PathOutsideWorkspace(_)));
    assert!(err.is_request_error());
}

#[tokio::test]
async fn test_open_missing_file() {
    let mut handler = workspace_handler();
    let path = document_fixture_path("missing.py");

    let result = handler
        .handle_open_document(path.to_string_lossy().into_owned(), None)
        .await;
    assert!(matches!(result, Err(Error::FileIo { .. })));
}

#[tokio::test]
async fn test_voice_session_on_fixture() {
    init_tracing();
    let mut handler = workspace_handler();
    handler
        .handle_open_document(
            document_fixture_path("sample.py")
                .to_string_lossy()
                .into_owned(),
            None,
        )
        .await
        .unwrap();

    // Cursor before `print` on the innermost line.
    handler.handle_set_selection(61, None).unwrap();

    let line = handler.handle_text_on_line(None).unwrap();
    assert_eq!(line.text, "        print(item)");
    assert_eq!(line.start.offset, 57);

    let indentation = handler.handle_line_indentation(None, None).unwrap();
    assert_eq!(indentation.line, 3);
    assert_eq!(indentation.indentation.spaces, 8);
    assert_eq!(indentation.indentation.level, 2);

    let context = handler.handle_dictation_context(Some(5)).unwrap();
    assert_eq!(context.before.text, "\n    ");
    assert_eq!(context.selected.text, "");
    assert_eq!(context.after.text, "print");

    handler
        .handle_set_symbols(&[symbol(
            "main",
            0,
            76,
            vec![symbol("loop", 34, 76, Vec::new())],
        )])
        .unwrap();
    let found = handler.handle_symbol_at_cursor().unwrap().unwrap();
    assert_eq!(found.name, "loop");

    handler.handle_set_selection(4, Some(8)).unwrap();
    let selection = handler.handle_selected_text().unwrap();
    assert_eq!(selection.text, "main");
    let found = handler.handle_symbol_at_cursor().unwrap().unwrap();
    assert_eq!(found.name, "main");
}

#[tokio::test]
async fn test_focus_and_close_switch_context() {
    let mut handler = CommandHandler::from_config(&ServerConfig::default());
    handler
        .handle_open_document("/virtual/a.md".to_string(), Some("first".to_string()))
        .await
        .unwrap();
    handler
        .handle_open_document("/virtual/b.md".to_string(), Some("second".to_string()))
        .await
        .unwrap();

    assert_eq!(handler.handle_file_path().unwrap().file_path, "/virtual/b.md");

    let info = handler.handle_focus_document("/virtual/a.md").unwrap();
    assert_eq!(info.language_id, "markdown");
    assert_eq!(handler.handle_document_bounds().unwrap().end.offset, 5);

    let closed = handler.handle_close_document("/virtual/a.md");
    assert!(closed.closed);

    assert!(matches!(
        handler.handle_cursor_position(),
        Err(Error::NoContext(_))
    ));
    assert_eq!(handler.document_tracker().len(), 1);
}

#[tokio::test]
async fn test_update_clamps_selection_and_drops_symbols() {
    let mut handler = CommandHandler::new();
    handler
        .handle_open_document("/virtual/note.txt".to_string(), Some("0123456789".to_string()))
        .await
        .unwrap();
    handler.handle_set_selection(2, Some(9)).unwrap();
    handler
        .handle_set_symbols(&[symbol("all", 0, 10, Vec::new())])
        .unwrap();

    let info = handler
        .handle_update_document("/virtual/note.txt", "0123".to_string())
        .unwrap();
    assert_eq!(info.version, 2);

    let selection = handler.handle_selected_text().unwrap();
    assert_eq!(selection.text, "23");
    assert!(handler.handle_symbol_at_cursor().unwrap().is_none());
}
