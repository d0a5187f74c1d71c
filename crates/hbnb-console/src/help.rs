//! Help topics.

const HEADER: &str = "Documented commands (type help <topic>):";

/// Documented commands, in listing order.
const TOPICS: &[(&str, &str)] = &[
    ("EOF", "Exit the program on end of input\nUsage: EOF"),
    (
        "all",
        "Print the string form of every instance, or of every instance of a class\n\
         Usage: all [<class>]\n       <class>.all()",
    ),
    (
        "count",
        "Print the number of instances of a class\n\
         Usage: count <class>\n       <class>.count()",
    ),
    (
        "create",
        "Create an instance, save it and print its id\n\
         Usage: create <class> [<key>=<value> ...]\n\
         Values: \"quoted_text\" (underscores become spaces), 1.5 (float), 42 (integer)",
    ),
    (
        "destroy",
        "Delete an instance by class and id\n\
         Usage: destroy <class> <id>\n       <class>.destroy(<id>)",
    ),
    (
        "help",
        "List available commands with \"help\" or detailed help with \"help cmd\".",
    ),
    ("quit", "Quit command to exit the program\nUsage: quit"),
    (
        "show",
        "Print the string form of an instance\n\
         Usage: show <class> <id>\n       <class>.show(<id>)",
    ),
    (
        "update",
        "Set one attribute of an instance and save it\n\
         Usage: update <class> <id> <attribute> <value>\n       \
         <class>.update(<id>, <attribute>, <value>)\n       \
         <class>.update(<id>, {\"<attribute>\": <value>, ...})",
    ),
];

/// Text printed by `help`: the topic listing, or one topic's usage.
pub fn render(topic: &str) -> String {
    let topic = topic.trim();
    if topic.is_empty() {
        return listing();
    }
    match TOPICS.iter().find(|(name, _)| *name == topic) {
        Some((_, text)) => (*text).to_string(),
        None => format!("*** No help on {topic}"),
    }
}

fn listing() -> String {
    let names: Vec<&str> = TOPICS.iter().map(|(name, _)| *name).collect();
    format!(
        "\n{HEADER}\n{}\n{}\n",
        "=".repeat(HEADER.len()),
        names.join("  ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_names_every_command() {
        let text = render("");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], HEADER);
        assert_eq!(lines[2], "=".repeat(40));
        assert_eq!(
            lines[3],
            "EOF  all  count  create  destroy  help  quit  show  update"
        );
    }

    #[test]
    fn known_topic() {
        assert!(render("quit").starts_with("Quit command"));
        assert!(render(" create ").contains("Usage: create <class>"));
    }

    #[test]
    fn unknown_topic() {
        assert_eq!(render("fly"), "*** No help on fly");
        assert_eq!(render("fly away"), "*** No help on fly away");
    }
}
