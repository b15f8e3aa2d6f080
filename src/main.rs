use std::{
    env,
    io::{self, BufRead, Write},
    process,
    rc::Rc,
};

use sexpr::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => repl(),
        2 => {
            if !run(&args[1], "argv") {
                process::exit(1);
            }
        }
        _ => {
            eprintln!("usage: sexpr [expression]");
            process::exit(2);
        }
    }
}

/// Parses one expression and prints the rendered tree, or a diagnostic.
fn run(input: &str, file: &str) -> bool {
    let tokens = tokenize(input.to_string(), Some(String::from(file)));
    let (_, result) = parse(tokens, Rc::new(String::from(file)));

    match result {
        Ok(tree) => {
            println!("{}", tree);
            true
        }
        Err(error) => {
            display_error(error, input);
            false
        }
    }
}

fn repl() {
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                eprintln!("failed to read input: {}", error);
                break;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.starts_with("exit") {
            break;
        }

        run(input, "repl");
    }
}
