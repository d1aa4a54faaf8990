#![no_main]

use engauge_digitizer::{parse_session, write_session, CommandHistory};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(session) = parse_session(text) else {
        return;
    };

    // Jede akzeptierte Session muss sich verlustfrei neu schreiben lassen
    let mut history = CommandHistory::new_with_capacity(session.commands.len().max(1));
    history
        .restore(session.commands.clone(), session.cursor)
        .expect("Parser liefert nur gültige Cursor");
    let reparsed = parse_session(&write_session(&session.coords, &history))
        .expect("geschriebene Session muss parsebar sein");
    assert_eq!(reparsed.commands.len(), session.commands.len());
    assert_eq!(reparsed.cursor, session.cursor);
});
