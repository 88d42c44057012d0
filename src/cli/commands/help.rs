//! The `/help` command.

use crate::session::Session;

const COMMANDS: &[(&str, &str)] = &[
    ("/send <template>", "evaluate and send as UTF-8 text"),
    ("/binary <template>", "evaluate and send raw bytes"),
    ("/set <name> <template>", "evaluate and store the result"),
    ("/unset <name>", "remove a stored value"),
    ("/vars", "list stored variables and functions"),
    ("/connect <host:port>", "open a TCP connection"),
    ("/disconnect", "close the connection"),
    ("/help", "show this help"),
    ("/quit", "leave the session"),
];

/// Print the command summary and per-function usage lines.
pub fn show(session: &Session) {
    let output = session.output();

    output.header("commands");
    for (usage, summary) in COMMANDS {
        output.key_value(usage, summary);
    }
    output.message("a line without a leading / is sent as /send");

    output.header("template functions");
    for function in session.registry().functions() {
        let names = function.names().join(", ");
        output.key_value(
            &format!("{:<24}", function.usage()),
            &format!("{} ({})", function.summary(), names),
        );
    }
    output.message("escapes: \\\\ \\$ \\n \\r \\0 \\xHH \\uHHHH \\u{H..H}");
}
