//! End-to-end runs of small programs against both console handlers.

use std::io::Cursor;

use freeio::{
    console::{self, Console, ConsoleError, Program, Script, Terminal},
    programs, Free, Handler, Step,
};

fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
    Terminal::new(Cursor::new(input.as_bytes().to_vec()), vec![])
}

fn written(terminal: Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(terminal.into_output()).expect("terminal output is utf-8")
}

#[test]
fn write_then_pure() {
    let program: Program<i32> = Program::roll(Console::write_text("Hi", Program::pure(())))
        .chain(|()| Free::pure(42));

    let mut terminal = terminal("");
    assert_eq!(program.run(&mut terminal).unwrap(), 42);
    assert_eq!(written(terminal), "Hi\n");
}

#[test]
fn read_then_uppercase() {
    let program: Program<String> = Program::roll(Console::read_text(|s| Program::pure(s)))
        .chain(|s: String| Free::pure(s.to_uppercase()));

    let mut script = Script::new(["tom"]);
    assert_eq!(program.run(&mut script).unwrap(), "TOM");
    assert!(script.output().is_empty());
}

#[test]
fn greeting_conversation() {
    let mut script = Script::new(["Ada"]);
    assert_eq!(programs::greeting().run(&mut script).unwrap(), "Ada");
    assert_eq!(script.output(), ["Hello! What's your name?", "Hello, Ada!"]);

    let mut terminal = terminal("Ada\n");
    assert_eq!(programs::greeting().run(&mut terminal).unwrap(), "Ada");
    assert_eq!(written(terminal), "Hello! What's your name?\nHello, Ada!\n");
}

#[test]
fn shout_through_the_terminal() {
    let mut terminal = terminal("quiet please\r\n");
    assert_eq!(programs::shout().run(&mut terminal).unwrap(), "QUIET PLEASE");
}

/// A handler written by hand, the way the recursive contract describes:
/// perform the effect, then interpret the rest with itself.
/// Never fails; every read gets the same canned answer.
struct Parrot {
    answer: String,
    heard: Vec<String>,
}

impl<A: 'static> Handler<console::ConsoleF, A> for Parrot {
    fn handle(&mut self, instruction: Console<Program<A>>) -> A {
        match instruction {
            Console::WriteText { text, next } => {
                self.heard.push(text);
                next.interpret(self)
            },
            Console::ReadText { resume } => {
                let answer = self.answer.clone();
                resume(answer).interpret(self)
            },
        }
    }
}

#[test]
fn hand_written_handler() {
    let mut parrot = Parrot { answer: "Polly".to_string(), heard: vec![] };
    assert_eq!(programs::greeting().interpret(&mut parrot), "Polly");
    assert_eq!(parrot.heard, ["Hello! What's your name?", "Hello, Polly!"]);
}

#[test]
fn same_program_different_handlers() {
    let build = || console::ask("first?").chain(|a| console::ask("second?").map(move |b| a + &b));

    let mut parrot = Parrot { answer: "ab".to_string(), heard: vec![] };
    let mut script = Script::new(["ab", "ab"]);
    let mut terminal = terminal("ab\nab\n");

    let by_parrot = build().interpret(&mut parrot);
    let by_script = build().run(&mut script).unwrap();
    let by_terminal = build().run(&mut terminal).unwrap();

    assert_eq!(by_parrot, "abab");
    assert_eq!(by_parrot, by_script);
    assert_eq!(by_script, by_terminal);
    assert_eq!(parrot.heard, script.output());
    assert_eq!(written(terminal), "first?\nsecond?\n");
}

#[test]
fn running_out_of_input_is_reported() {
    let mut script = Script::new(["only one"]);
    let program = console::read().then(console::read());
    match program.run(&mut script) {
        Err(ConsoleError::EndOfInput) => (),
        other => panic!("expected end of input, got {:?}", other),
    }

    let mut terminal = terminal("");
    let result = programs::greeting().map(Ok::<_, ConsoleError>).interpret(&mut terminal);
    assert!(matches!(result, Err(ConsoleError::EndOfInput)));
    assert_eq!(written(terminal), "Hello! What's your name?\n");
}

#[test]
fn resume_exposes_one_step_at_a_time() {
    let program = programs::greeting();

    let next = match program.resume() {
        Step::Suspended(Console::WriteText { text, next }) => {
            assert_eq!(text, "Hello! What's your name?");
            next
        },
        _ => panic!("the greeting starts by writing"),
    };

    let next = match next.resume() {
        Step::Suspended(Console::ReadText { resume }) => resume("Lin".to_string()),
        _ => panic!("then it reads"),
    };

    let next = match next.resume() {
        Step::Suspended(Console::WriteText { text, next }) => {
            assert_eq!(text, "Hello, Lin!");
            next
        },
        _ => panic!("then it answers"),
    };

    match next.resume() {
        Step::Pure(name) => assert_eq!(name, "Lin"),
        _ => panic!("and then it is done"),
    }
}

#[test]
fn long_echo_session() {
    let lines: Vec<String> = (0..100_000)
        .map(|i| format!("line {}", i))
        .chain(std::iter::once("quit".to_string()))
        .collect();

    let mut script = Script::new(lines);
    assert_eq!(programs::echo("quit").run(&mut script).unwrap(), 100_000);
    assert_eq!(script.output().len(), 100_000);
    assert_eq!(script.output()[99_999], "line 99999");
}

#[test]
fn age_through_the_terminal() {
    let mut terminal = terminal("twelve\n12\n");
    assert_eq!(programs::age().run(&mut terminal).unwrap(), 12);
    assert_eq!(
        written(terminal),
        "How old are you?\ntwelve is not a number, try again.\nHow old are you?\n",
    );
}

#[test]
fn long_left_folded_session() {
    let mut program: Program<usize> = Free::pure(0);
    for i in 0..100_000 {
        program = program.chain(move |count| console::write(format!("tick {}", i)).map(move |()| count + 1));
    }
    let program = program.chain(|count| console::read().map(move |line| count + line.len()));

    let mut script = Script::new(["done"]);
    assert_eq!(program.run(&mut script).unwrap(), 100_004);
    assert_eq!(script.output().len(), 100_000);
    assert_eq!(script.output()[0], "tick 0");
    assert_eq!(script.output()[99_999], "tick 99999");
}
