//! Fix command - apply the scripted source cleanups
//!
//! Runs the fixed sequence of edits:
//! 1. localStorage.ts: the debounce timer map is never reassigned, so its
//!    declaration becomes `const`
//! 2. ChatInterface.tsx: drop the unused session state hook and give the
//!    speech recognition handlers their real types instead of `any`
//! 3. ChatInterface.tsx: trim the unused PracticeSession import
//! 4. globals.css: replace the stylesheet wholesale with the branded version
//!
//! Later steps may re-read a file an earlier step wrote, so the order is
//! fixed. The first failing step aborts the rest; completed writes stay.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use std::path::Path;

use crate::config;
use crate::patch::engine;

/// Whole-file substitutions for localStorage.ts
const DEBOUNCE_TIMER_RULES: &[(&str, &str)] =
    &[("let debounceTimers:", "const debounceTimers:")];

/// Any line carrying this text is removed from ChatInterface.tsx
const UNUSED_SESSION_STATE: &str = "const [currentSession, setCurrentSession]";

/// Per-line substitutions for the lines that survive the state removal
const SPEECH_HANDLER_RULES: &[(&str, &str)] = &[
    (
        "recognitionRef.current.onresult = (event: any)",
        "recognitionRef.current.onresult = (event: SpeechRecognitionEvent)",
    ),
    (
        "recognitionRef.current.onerror = (event: any)",
        "recognitionRef.current.onerror = (event: SpeechRecognitionErrorEvent)",
    ),
    (
        "const recognitionRef = useRef<any>(null)",
        "const recognitionRef = useRef<SpeechRecognitionInterface | null>(null)",
    ),
];

/// Whole-file substitutions trimming the unused import
const IMPORT_RULES: &[(&str, &str)] = &[(
    "import { Message, UserLevel, CEFRLevel, PracticeSession } from",
    "import { Message, UserLevel, CEFRLevel } from",
)];

/// Replacement stylesheet, written verbatim over globals.css
const STYLESHEET: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;

@layer base {
  body {
    font-family: system-ui, -apple-system, sans-serif;
    font-feature-settings: "rlig" 1, "calt" 1;
  }
}

@layer utilities {
  .text-balance {
    text-wrap: balance;
  }
}

/* Custom scrollbar */
::-webkit-scrollbar {
  width: 8px;
}

::-webkit-scrollbar-track {
  background: #f1f5f9;
}

::-webkit-scrollbar-thumb {
  background: #94a3b8;
  border-radius: 4px;
}

::-webkit-scrollbar-thumb:hover {
  background: #64748b;
}

/* Animation for typing indicator */
@keyframes bounce {
  0%, 80%, 100% {
    transform: translateY(0);
  }
  40% {
    transform: translateY(-8px);
  }
}

.animate-bounce {
  animation: bounce 1s infinite;
}

/* Ensure proper text colors */
.text-gray-900 {
  color: #111827;
}

.text-gray-800 {
  color: #1f2937;
}

.text-gray-700 {
  color: #374151;
}

.text-gray-600 {
  color: #4b5563;
}

.text-white {
  color: #ffffff;
}

.bg-blue-500 {
  background-color: #3b82f6;
}

.bg-white {
  background-color: #ffffff;
}

.hover\:bg-blue-600:hover {
  background-color: #2563eb;
}
"#;

/// Execute the fix command
pub fn execute(app_root: &Path, dry_run: bool) -> Result<()> {
    if !app_root.exists() {
        bail!("App root does not exist: {}", app_root.display());
    }

    println!();
    println!("{}", "=== Practice Chat Source Fixup ===".green());
    println!();

    let local_storage = config::local_storage_file(app_root);
    let chat_interface = config::chat_interface_file(app_root);
    let stylesheet = config::stylesheet_file(app_root);

    println!(
        "{}",
        "Step 1: Const-correcting the debounce timer map...".green()
    );
    println!("  {}", config::LOCAL_STORAGE_TS);
    let modified = engine::apply_substring_rules(&local_storage, DEBOUNCE_TIMER_RULES, dry_run)?;
    report(modified, dry_run);

    println!(
        "{}",
        "Step 2: Removing unused session state and typing speech handlers...".green()
    );
    println!("  {}", config::CHAT_INTERFACE_TSX);
    let modified = engine::filter_and_rewrite_lines(
        &chat_interface,
        |line| line.contains(UNUSED_SESSION_STATE),
        SPEECH_HANDLER_RULES,
        dry_run,
    )?;
    report(modified, dry_run);

    println!(
        "{}",
        "Step 3: Trimming the unused PracticeSession import...".green()
    );
    println!("  {}", config::CHAT_INTERFACE_TSX);
    let modified = engine::apply_substring_rules(&chat_interface, IMPORT_RULES, dry_run)?;
    report(modified, dry_run);

    println!("{}", "Step 4: Writing the branded stylesheet...".green());
    println!("  {}", config::GLOBALS_CSS);
    let modified = engine::overwrite_with_fixed_content(&stylesheet, STYLESHEET, dry_run)?;
    report(modified, dry_run);

    println!();
    if dry_run {
        println!("This was a dry-run. No changes were made.");
        println!("Run without --dry-run to apply changes.");
    } else {
        println!("{}", "All fixes applied successfully!".green());
    }

    Ok(())
}

/// Print the per-step outcome
fn report(modified: bool, dry_run: bool) {
    if !modified {
        println!("  -> already clean");
    } else if dry_run {
        println!("  {} would update", "[DRY-RUN]".blue());
    } else {
        println!("  -> updated");
    }
}
