//! The `quizforge init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("question-banks")?;
    let example_path = std::path::Path::new("question-banks/example.toml");
    if example_path.exists() {
        println!("question-banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created question-banks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit question-banks/example.toml with your questions");
    println!("  2. Run: quizforge validate --bank question-banks");
    println!("  3. Run: quizforge generate --bank question-banks --modules getting-started");

    Ok(())
}

const EXAMPLE_BANK: &str = r#"# quizforge question bank
#
# Each file holds one category of questions. `module` tags questions for
# selection filters; `difficulty` is easy, medium, or hard.

[bank]
category = "example"

[[questions]]
id = "ex_001"
type = "multiple_choice"
prompt = "Which option is correct?"
options = ["First", "Second", "Third", "Fourth"]
correct_answer = "Second"
explanation = "The second option is correct because of reasons."
difficulty = "easy"
module = "getting-started"

[[questions]]
id = "ex_002"
type = "true_false"
prompt = "quizforge banks are written in TOML."
correct_answer = true
explanation = "Bank files are plain TOML."
difficulty = "easy"
module = "getting-started"

[[questions]]
id = "ex_003"
type = "short_answer"
prompt = "Name the command that checks a bank for problems."
correct_answer = "validate"
explanation = "quizforge validate reports duplicate ids and malformed questions."
difficulty = "medium"
module = "getting-started"

[[questions]]
id = "ex_004"
type = "essay"
prompt = "Describe how you would organize question banks for a multi-module course."
correct_answer = "See grading notes"
explanation = "Expected: one category file per topic, consistent module tags."
difficulty = "hard"
module = "getting-started"
"#;
