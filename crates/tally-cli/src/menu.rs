//! Interactive menu over a TaskStore.
//!
//! Every handler is generic over `BufRead`/`Write`, so the whole loop runs
//! against `Cursor` buffers in tests exactly as it runs against stdin and
//! stdout in `main`. The store holds all business logic; this module only
//! prompts, parses, and renders.

use std::io::{self, BufRead, Write};

use tally_core::{Patch, Task, TaskId, TaskStore};

const GREEN: &str = "\x1b[92m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// One menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    List,
    Update,
    Complete,
    Incomplete,
    Delete,
    Exit,
}

fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim().parse::<u8>().ok()? {
        1 => Some(Choice::Add),
        2 => Some(Choice::List),
        3 => Some(Choice::Update),
        4 => Some(Choice::Complete),
        5 => Some(Choice::Incomplete),
        6 => Some(Choice::Delete),
        7 => Some(Choice::Exit),
        _ => None,
    }
}

/// Run the menu loop until the user exits (or input reaches EOF).
pub fn run<S, R, W>(store: &mut S, reader: &mut R, writer: &mut W) -> io::Result<()>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    writeln!(writer, "Welcome to Tally, the interactive task tracker!")?;

    loop {
        print_menu(writer)?;

        let choice = loop {
            let Some(line) = prompt_line(reader, writer, "Enter your choice (1-7): ")? else {
                return Ok(());
            };
            match parse_choice(&line) {
                Some(choice) => break choice,
                None => writeln!(writer, "Please enter a number between 1 and 7.")?,
            }
        };

        match choice {
            Choice::Add => handle_add(store, reader, writer)?,
            Choice::List => render_tasks(writer, &store.list())?,
            Choice::Update => handle_update(store, reader, writer)?,
            Choice::Complete => handle_complete(store, reader, writer)?,
            Choice::Incomplete => handle_incomplete(store, reader, writer)?,
            Choice::Delete => handle_delete(store, reader, writer)?,
            Choice::Exit => {
                writeln!(writer, "\nThank you for using Tally. Goodbye!")?;
                return Ok(());
            }
        }

        // Pause so the result stays visible before the menu redraws.
        if prompt_line(reader, writer, "\nPress Enter to continue...")?.is_none() {
            return Ok(());
        }
    }
}

fn print_menu<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "\n{}", "=".repeat(40))?;
    writeln!(writer, "TALLY - Interactive Menu")?;
    writeln!(writer, "{}", "=".repeat(40))?;
    writeln!(writer, "1. Add a new task")?;
    writeln!(writer, "2. List all tasks")?;
    writeln!(writer, "3. Update a task")?;
    writeln!(writer, "4. Mark task as complete")?;
    writeln!(writer, "5. Mark task as incomplete")?;
    writeln!(writer, "6. Delete a task")?;
    writeln!(writer, "7. Exit")?;
    writeln!(writer, "{}", "-".repeat(40))
}

/// Print a prompt and read one line, trimmed. `None` means EOF.
fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Prompt for a task id. `None` on EOF, empty input, or an unparseable id
/// (the latter two are reported to the user).
fn read_task_id<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<Option<TaskId>> {
    let Some(line) = prompt_line(reader, writer, "Enter task ID: ")? else {
        return Ok(None);
    };
    if line.is_empty() {
        print_error(writer, "Error: task ID cannot be empty")?;
        return Ok(None);
    }
    match line.parse::<TaskId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            print_error(writer, &format!("Error: '{line}' is not a valid task ID"))?;
            Ok(None)
        }
    }
}

fn print_success<W: Write>(writer: &mut W, message: &str) -> io::Result<()> {
    writeln!(writer, "{GREEN}{message}{RESET}")
}

fn print_error<W: Write>(writer: &mut W, message: &str) -> io::Result<()> {
    writeln!(writer, "{RED}{message}{RESET}")
}

fn render_tasks<W: Write>(writer: &mut W, tasks: &[Task]) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(writer, "\nNo tasks found.");
    }

    writeln!(writer, "\nAll Tasks:")?;
    writeln!(writer, "{}", "-".repeat(50))?;
    for task in tasks {
        let status = if task.completed() { "X" } else { "O" };
        writeln!(writer, "[{status}] ID: {}", task.id())?;
        writeln!(writer, "    Title: {}", task.title())?;
        if let Some(description) = task.description() {
            writeln!(writer, "    Description: {description}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn handle_add<S, R, W>(store: &mut S, reader: &mut R, writer: &mut W) -> io::Result<()>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    let Some(title) = prompt_line(reader, writer, "Enter task title: ")? else {
        return Ok(());
    };
    if title.is_empty() {
        return print_error(writer, "Error: task title cannot be empty");
    }

    let Some(description_input) = prompt_line(
        reader,
        writer,
        "Enter task description (optional, press Enter to skip): ",
    )?
    else {
        return Ok(());
    };
    let description = if description_input.is_empty() {
        None
    } else {
        Some(description_input)
    };

    match store.add(&title, description) {
        Ok(task) => {
            print_success(writer, &format!("Task '{}' added successfully!", task.title()))?;
            writeln!(writer, "Task ID: {}", task.id())
        }
        Err(err) => print_error(writer, &format!("Error: {err}")),
    }
}

fn handle_update<S, R, W>(store: &mut S, reader: &mut R, writer: &mut W) -> io::Result<()>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    let Some(id) = read_task_id(reader, writer)? else {
        return Ok(());
    };
    let Some(current) = store.find_by_id(id) else {
        return print_error(writer, &format!("Task with ID {id} not found."));
    };

    writeln!(writer, "Current task: {}", current.title())?;
    if let Some(description) = current.description() {
        writeln!(writer, "Current description: {description}")?;
    }

    let Some(title_input) = prompt_line(
        reader,
        writer,
        "Enter new title (or press Enter to keep current): ",
    )?
    else {
        return Ok(());
    };
    let Some(description_input) = prompt_line(
        reader,
        writer,
        "Enter new description (press Enter to keep current, '-' to clear): ",
    )?
    else {
        return Ok(());
    };

    let title = if title_input.is_empty() {
        None
    } else {
        Some(title_input.as_str())
    };
    let description = match description_input.as_str() {
        "" => Patch::Keep,
        "-" => Patch::Clear,
        text => Patch::Set(text.to_string()),
    };

    if title.is_none() && description.is_keep() {
        return writeln!(writer, "No changes made to the task.");
    }

    match store.update(id, title, description) {
        Ok(Some(task)) => {
            print_success(writer, "Task updated successfully!")?;
            writeln!(writer, "New title: {}", task.title())?;
            if let Some(description) = task.description() {
                writeln!(writer, "New description: {description}")?;
            }
            Ok(())
        }
        Ok(None) => print_error(writer, &format!("Task with ID {id} not found.")),
        Err(err) => print_error(writer, &format!("Error: {err}")),
    }
}

fn handle_complete<S, R, W>(store: &mut S, reader: &mut R, writer: &mut W) -> io::Result<()>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    let Some(id) = read_task_id(reader, writer)? else {
        return Ok(());
    };
    if store.mark_complete(id) {
        print_success(writer, "Task marked as complete!")?;
        if let Some(task) = store.find_by_id(id) {
            writeln!(writer, "Task: {}", task.title())?;
        }
        Ok(())
    } else {
        print_error(writer, &format!("Task with ID {id} not found."))
    }
}

fn handle_incomplete<S, R, W>(store: &mut S, reader: &mut R, writer: &mut W) -> io::Result<()>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    let Some(id) = read_task_id(reader, writer)? else {
        return Ok(());
    };
    if store.mark_incomplete(id) {
        print_success(writer, "Task marked as incomplete!")?;
        if let Some(task) = store.find_by_id(id) {
            writeln!(writer, "Task: {}", task.title())?;
        }
        Ok(())
    } else {
        print_error(writer, &format!("Task with ID {id} not found."))
    }
}

fn handle_delete<S, R, W>(store: &mut S, reader: &mut R, writer: &mut W) -> io::Result<()>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    let Some(id) = read_task_id(reader, writer)? else {
        return Ok(());
    };
    if store.delete(id) {
        print_success(writer, "Task deleted successfully!")
    } else {
        print_error(writer, &format!("Task with ID {id} not found."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;
    use tally_core::InMemoryStore;

    /// Drive the full menu loop with scripted input; returns the rendered
    /// output with ANSI color codes stripped.
    fn run_session(store: &mut InMemoryStore, input: &str) -> String {
        let mut reader = Cursor::new(input.to_string());
        let mut output = Vec::new();
        run(store, &mut reader, &mut output).expect("in-memory io");
        String::from_utf8(output)
            .expect("utf8 output")
            .replace(GREEN, "")
            .replace(RED, "")
            .replace(RESET, "")
    }

    #[rstest]
    #[case::add("1", Some(Choice::Add))]
    #[case::list("2", Some(Choice::List))]
    #[case::update("3", Some(Choice::Update))]
    #[case::complete("4", Some(Choice::Complete))]
    #[case::incomplete("5", Some(Choice::Incomplete))]
    #[case::delete("6", Some(Choice::Delete))]
    #[case::exit("7", Some(Choice::Exit))]
    #[case::padded(" 2 ", Some(Choice::List))]
    #[case::zero("0", None)]
    #[case::out_of_range("8", None)]
    #[case::not_a_number("abc", None)]
    #[case::empty("", None)]
    fn choice_parsing(#[case] input: &str, #[case] expected: Option<Choice>) {
        assert_eq!(parse_choice(input), expected);
    }

    #[test]
    fn exit_prints_goodbye() {
        let mut store = InMemoryStore::new();
        let output = run_session(&mut store, "7\n");

        assert!(output.contains("Thank you for using Tally. Goodbye!"));
    }

    #[test]
    fn eof_exits_cleanly() {
        let mut store = InMemoryStore::new();
        let output = run_session(&mut store, "");

        assert!(output.contains("Enter your choice"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let mut store = InMemoryStore::new();
        let output = run_session(&mut store, "abc\n9\n7\n");

        assert!(output.contains("Please enter a number between 1 and 7."));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn add_then_list_shows_the_task() {
        let mut store = InMemoryStore::new();
        let output = run_session(&mut store, "1\nBuy milk\n2%\n\n2\n\n7\n");

        assert!(output.contains("Task 'Buy milk' added successfully!"));
        assert!(output.contains("Title: Buy milk"));
        assert!(output.contains("Description: 2%"));
        assert!(output.contains("[O] ID: task-"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_with_empty_title_is_rejected_at_the_prompt() {
        let mut store = InMemoryStore::new();
        let output = run_session(&mut store, "1\n   \n\n7\n");

        assert!(output.contains("Error: task title cannot be empty"));
        assert!(store.is_empty());
    }

    #[test]
    fn list_when_empty() {
        let mut store = InMemoryStore::new();
        let output = run_session(&mut store, "2\n\n7\n");

        assert!(output.contains("No tasks found."));
    }

    #[test]
    fn update_changes_title_and_keeps_description() {
        let mut store = InMemoryStore::new();
        let task = store.add("Old title", Some("keep me".to_string())).unwrap();

        let input = format!("3\n{}\nNew title\n\n\n7\n", task.id());
        let output = run_session(&mut store, &input);

        assert!(output.contains("Current task: Old title"));
        assert!(output.contains("Task updated successfully!"));
        assert!(output.contains("New title: New title"));
        let stored = store.find_by_id(task.id()).unwrap();
        assert_eq!(stored.title(), "New title");
        assert_eq!(stored.description(), Some("keep me"));
    }

    #[test]
    fn update_with_dash_clears_the_description() {
        let mut store = InMemoryStore::new();
        let task = store.add("Title", Some("old desc".to_string())).unwrap();

        let input = format!("3\n{}\n\n-\n\n7\n", task.id());
        let output = run_session(&mut store, &input);

        assert!(output.contains("Task updated successfully!"));
        assert_eq!(store.find_by_id(task.id()).unwrap().description(), None);
    }

    #[test]
    fn update_with_no_input_makes_no_changes() {
        let mut store = InMemoryStore::new();
        let task = store.add("Title", None).unwrap();

        let input = format!("3\n{}\n\n\n\n7\n", task.id());
        let output = run_session(&mut store, &input);

        assert!(output.contains("No changes made to the task."));
    }

    #[test]
    fn update_unknown_id_reports_not_found() {
        let mut store = InMemoryStore::new();
        store.add("Title", None).unwrap();
        let ghost = "01ARZ3NDEKTSV4RRFFQ69G5FAV"; // valid ULID, matches nothing

        let input = format!("3\n{ghost}\n\n7\n");
        let output = run_session(&mut store, &input);

        assert!(output.contains("not found."));
    }

    #[test]
    fn unparseable_id_is_reported() {
        let mut store = InMemoryStore::new();
        store.add("Title", None).unwrap();

        let output = run_session(&mut store, "6\nnot-an-id\n\n7\n");

        assert!(output.contains("'not-an-id' is not a valid task ID"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn complete_and_incomplete_toggle_through_the_menu() {
        let mut store = InMemoryStore::new();
        let task = store.add("Toggle me", None).unwrap();

        let input = format!("4\n{id}\n\n5\n{id}\n\n7\n", id = task.id());
        let output = run_session(&mut store, &input);

        assert!(output.contains("Task marked as complete!"));
        assert!(output.contains("Task marked as incomplete!"));
        assert!(!store.find_by_id(task.id()).unwrap().completed());
    }

    #[test]
    fn delete_through_the_menu() {
        let mut store = InMemoryStore::new();
        let task = store.add("Delete me", None).unwrap();

        let input = format!("6\n{id}\n\n6\n{id}\n\n7\n", id = task.id());
        let output = run_session(&mut store, &input);

        assert!(output.contains("Task deleted successfully!"));
        assert!(output.contains("not found."));
        assert!(store.is_empty());
    }
}
