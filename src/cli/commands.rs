//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::PathBuf;

/// Commands for the Bhasha translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a single piece of text
    Text {
        /// Text to translate
        input: String,

        /// Target language (default: bn)
        #[arg(short, long, default_value = "bn")]
        target_lang: String,
    },

    /// Translate a newline-separated list of fragments
    Batch {
        /// Input file with one fragment per line
        #[arg(short, long)]
        file: PathBuf,

        /// Target language (default: bn)
        #[arg(short, long, default_value = "bn")]
        target_lang: String,
    },

    /// Translate Markdown or plain-text files, preserving structure
    File {
        /// Input file or directory
        #[arg(short, long)]
        file: PathBuf,

        /// Output file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target language (default: bn)
        #[arg(short, long, default_value = "bn")]
        target_lang: String,

        /// Recursively translate subdirectories
        #[arg(short, long)]
        recursive: bool,
    },
}

/// Handle single-text translation
pub async fn handle_text(input: String, target_lang: String) -> anyhow::Result<()> {
    use crate::core::pipeline::{FallbackTranslator, UNTRANSLATED_PREFIX};

    let translator = FallbackTranslator::from_env()?;
    let result = translator.translate(&input, &target_lang).await;

    if result.starts_with(UNTRANSLATED_PREFIX) {
        eprintln!("⚠️  All providers failed; original text returned");
    }
    println!("{}", result);

    Ok(())
}

/// Handle batch translation of fragments from a file
pub async fn handle_batch(file: PathBuf, target_lang: String) -> anyhow::Result<()> {
    use crate::core::pipeline::FallbackTranslator;
    use tracing::info;

    let content = tokio::fs::read_to_string(&file).await?;
    let fragments: Vec<String> = content.lines().map(|l| l.to_string()).collect();

    if fragments.is_empty() {
        anyhow::bail!("No fragments found in {}", file.display());
    }

    info!("Translating {} fragments to {}", fragments.len(), target_lang);

    let translator = FallbackTranslator::from_env()?;
    let results = translator.translate_batch(&fragments, &target_lang).await;

    for result in results {
        println!("{}", result);
    }

    Ok(())
}

/// Handle structure-preserving file translation
pub async fn handle_file(
    file: PathBuf,
    output: Option<PathBuf>,
    target_lang: String,
    recursive: bool,
) -> anyhow::Result<()> {
    use crate::processors::structured::StructuredTranslator;
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Instant;
    use tracing::info;

    let start_time = Instant::now();

    // Determine output path
    let output = output.unwrap_or_else(|| {
        if file.is_dir() {
            file.join("translated")
        } else {
            let mut out = file.clone();
            let mut filename = file.file_name().unwrap_or_default().to_os_string();
            filename.push("_translated");
            out.set_file_name(filename);
            out
        }
    });

    info!("Starting structured translation");
    info!("Input: {}", file.display());
    info!("Output: {}", output.display());
    info!("Target language: {}", target_lang);
    info!("Recursive: {}", recursive);

    let translator = StructuredTranslator::from_env()?;

    // Find files
    let files = if file.is_dir() {
        if recursive {
            translator.find_files_recursive(&file)?
        } else {
            translator.find_files(&file)?
        }
    } else {
        vec![file.clone()]
    };

    if files.is_empty() {
        anyhow::bail!("No translatable files found");
    }

    let translate_into_dir = file.is_dir();

    // Create progress bar
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        .unwrap()
        .progress_chars("=>-"));

    // Process files
    let mut processed = 0;
    let mut failed = 0;

    for file_path in files {
        pb.set_message(format!("Processing: {}", file_path.display()));

        let out_path = if translate_into_dir {
            match file_path.strip_prefix(&file) {
                Ok(rel) => output.join(rel),
                Err(_) => output.join(file_path.file_name().unwrap_or_default()),
            }
        } else {
            output.clone()
        };

        match translator
            .translate_file(&file_path, &out_path, &target_lang)
            .await
        {
            Ok(_) => {
                processed += 1;
                pb.inc(1);
            }
            Err(e) => {
                failed += 1;
                pb.set_message(format!("Failed: {} - {}", file_path.display(), e));
                eprintln!("Error processing {}: {}", file_path.display(), e);
            }
        }
    }

    pb.finish_with_message("Completed");

    let duration = start_time.elapsed();
    info!(
        "Completed: {} processed, {} failed in {:?}",
        processed, failed, duration
    );

    println!("\n✅ Translation completed!");
    println!("   Processed: {}", processed);
    println!("   Failed: {}", failed);
    println!("   Time: {:?}", duration);

    Ok(())
}
