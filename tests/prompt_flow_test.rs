use line_transformer::{
    FileTransformError, LinePipeline, LocalStorage, MemoryReporter, PathPrompter, TransformEngine,
    TransformerConfig,
};
use std::io::Cursor;
use std::sync::Arc;
use tempfile::TempDir;

/// 模擬使用者先輸錯檔名，再輸入正確的輸入與輸出路徑
#[tokio::test]
async fn test_prompted_paths_drive_a_full_run() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("my_story.txt");
    let output = temp_dir.path().join("modified_story.txt");
    std::fs::write(&input, "once upon a time\nthe end\n")?;

    let answers = format!(
        "{}\n{}\n{}\n",
        temp_dir.path().join("typo.txt").display(),
        input.display(),
        output.display()
    );
    let mut prompter = PathPrompter::new(Cursor::new(answers.into_bytes()), Vec::new());
    let input_path = prompter.prompt_input_path()?;
    let output_path = prompter.prompt_output_path()?;

    let transcript = String::from_utf8(prompter.into_output())?;
    assert!(transcript.contains("typo.txt' does not exist"));

    let config = TransformerConfig::default();
    let reporter = Arc::new(MemoryReporter::new());
    let pipeline = LinePipeline::new(
        LocalStorage::default(),
        &input_path,
        &output_path,
        config.line_transform(),
    );
    TransformEngine::new(pipeline)
        .with_reporter(Arc::clone(&reporter))
        .run()
        .await?;

    assert_eq!(
        std::fs::read_to_string(&output)?,
        "MODIFIED: ONCE UPON A TIME\nMODIFIED: THE END\n"
    );
    assert_eq!(reporter.messages().len(), 3);
    Ok(())
}

#[test]
fn test_prompt_gives_up_after_configured_attempts() {
    let config = TransformerConfig::from_toml_str("[prompt]\nmax_attempts = 3\n").unwrap();
    let answers = "nope-1.txt\nnope-2.txt\nnope-3.txt\nnope-4.txt\n";
    let mut prompter = PathPrompter::new(Cursor::new(answers.as_bytes()), Vec::new())
        .with_max_attempts(config.max_attempts());

    let err = prompter.prompt_input_path().unwrap_err();

    assert!(matches!(
        err,
        FileTransformError::PromptAttemptsExhausted { attempts: 3 }
    ));
    let transcript = String::from_utf8(prompter.into_output()).unwrap();
    assert_eq!(transcript.matches("does not exist").count(), 3);
    assert!(!transcript.contains("nope-4.txt"));
}

#[tokio::test]
async fn test_configured_transform_is_applied() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.txt");
    std::fs::write(&input, "  Mixed Case  \n")?;

    let config = TransformerConfig::from_toml_str(
        r#"
[transform]
prefix = "> "
trim = "both"
uppercase = false
"#,
    )?;

    line_transformer::transform(&input, &output, config.line_transform()).await?;

    assert_eq!(std::fs::read_to_string(&output)?, "> Mixed Case\n");
    Ok(())
}
