use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn task_cli(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("task-cli").unwrap();
    cmd.current_dir(temp.path())
        .env_remove("TASK_CLI_STORAGE__PATH")
        .env_remove("TASK_CLI_LOGGING__LEVEL");
    cmd
}

#[test]
fn list_without_task_file_shows_no_tasks() -> anyhow::Result<()> {
    let temp = TempDir::new()?;

    task_cli(&temp)
        .args(["--file", "tasks.txt", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks available."));

    temp.child("tasks.txt").assert(predicate::path::missing());
    Ok(())
}

#[test]
fn add_complete_and_list_round_trip_through_the_file() -> anyhow::Result<()> {
    // Arrange
    let temp = TempDir::new()?;

    // Act
    task_cli(&temp)
        .args(["--file", "tasks.txt", "add", "Buy milk", "2024-01-15"])
        .assert()
        .success()
        .stdout("Task added successfully.\n");
    task_cli(&temp)
        .args(["--file", "tasks.txt", "complete", "1"])
        .assert()
        .success()
        .stdout("Task marked as completed.\n");

    // Assert
    temp.child("tasks.txt")
        .assert("Title|Date|Status\nBuy milk|2024-01-15|true\n");
    task_cli(&temp)
        .args(["--file", "tasks.txt", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 | Buy milk").and(predicate::str::contains("Completed")));
    Ok(())
}

#[test]
fn default_storage_path_lives_in_dedicated_directory() -> anyhow::Result<()> {
    let temp = TempDir::new()?;

    task_cli(&temp)
        .args(["add", "Buy milk", "2024-01-15"])
        .assert()
        .success();

    temp.child("TaskManager/tasks.txt")
        .assert("Title|Date|Status\nBuy milk|2024-01-15|false\n");
    Ok(())
}

#[test]
fn delete_with_invalid_position_is_reported_not_fatal() -> anyhow::Result<()> {
    // Arrange
    let temp = TempDir::new()?;
    let contents = "Title|Date|Status\na|2024-01-01|false\nb|2024-01-02|false\n";
    temp.child("tasks.txt").write_str(contents)?;

    // Act / Assert
    task_cli(&temp)
        .args(["--file", "tasks.txt", "delete", "5"])
        .assert()
        .success()
        .stdout("Invalid task index.\n");
    temp.child("tasks.txt").assert(contents);
    Ok(())
}

#[test]
fn add_rejects_delimiter_in_title() -> anyhow::Result<()> {
    let temp = TempDir::new()?;

    task_cli(&temp)
        .args(["--file", "tasks.txt", "add", "milk|eggs", "2024-01-15"])
        .assert()
        .success()
        .stdout("Title and date may not contain '|'.\n");

    temp.child("tasks.txt").assert(predicate::path::missing());
    Ok(())
}

#[test]
fn add_rejects_line_break_in_title() -> anyhow::Result<()> {
    let temp = TempDir::new()?;

    task_cli(&temp)
        .args(["--file", "tasks.txt", "add", "line1\nline2", "2024-01-15"])
        .assert()
        .success()
        .stdout("Title and date may not contain line breaks.\n");

    temp.child("tasks.txt").assert(predicate::path::missing());
    Ok(())
}

#[test]
fn add_leaves_unreadable_task_file_untouched() -> anyhow::Result<()> {
    // Arrange
    let temp = TempDir::new()?;
    let contents: &[u8] =
        b"Title|Date|Status\nBuy milk|2024-01-15|false\nCaf\xE9|2024-01-16|true\nReport|2024-01-20|true\n";
    temp.child("tasks.txt").write_binary(contents)?;

    // Act
    task_cli(&temp)
        .args(["--file", "tasks.txt", "add", "New", "2024-02-01"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Error loading tasks: ")
                .and(predicate::str::contains("no changes were made"))
                .and(predicate::str::contains("Task added successfully.").not()),
        );

    // Assert
    assert_eq!(std::fs::read(temp.child("tasks.txt").path())?, contents);
    Ok(())
}

#[test]
fn menu_session_saves_on_exit() -> anyhow::Result<()> {
    let temp = TempDir::new()?;

    task_cli(&temp)
        .args(["--file", "tasks.txt"])
        .write_stdin("1\nBuy milk\n2024-01-15\n4\n5\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("No existing task file found.")
                .and(predicate::str::contains("Task added successfully."))
                .and(predicate::str::contains("Tasks saved. Exiting...")),
        );

    temp.child("tasks.txt")
        .assert("Title|Date|Status\nBuy milk|2024-01-15|false\n");
    Ok(())
}

#[test]
fn malformed_lines_are_skipped_on_load() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    temp.child("tasks.txt")
        .write_str("Title|Date|Status\nbroken line\nBuy milk|2024-01-15|false\n")?;

    task_cli(&temp)
        .args(["--file", "tasks.txt", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1 | Buy milk").and(predicate::str::contains("broken").not()),
        );
    Ok(())
}

#[test]
fn storage_path_is_read_from_config_file() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    temp.child("task-cli.toml")
        .write_str("[storage]\npath = \"configured.txt\"\n")?;

    task_cli(&temp)
        .args(["add", "Buy milk", "2024-01-15"])
        .assert()
        .success();

    temp.child("configured.txt")
        .assert(predicate::str::contains("Buy milk|2024-01-15|false"));
    Ok(())
}

#[test]
fn storage_path_is_read_from_environment() -> anyhow::Result<()> {
    let temp = TempDir::new()?;

    task_cli(&temp)
        .env("TASK_CLI_STORAGE__PATH", "from-env.txt")
        .args(["add", "Buy milk", "2024-01-15"])
        .assert()
        .success();

    temp.child("from-env.txt")
        .assert(predicate::str::contains("Buy milk|2024-01-15|false"));
    Ok(())
}

#[test]
fn unknown_log_level_fails_startup() -> anyhow::Result<()> {
    let temp = TempDir::new()?;

    task_cli(&temp)
        .env("TASK_CLI_LOGGING__LEVEL", "loud")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log level 'loud'"));
    Ok(())
}
