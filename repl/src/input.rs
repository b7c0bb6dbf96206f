use std::io::{self, Write};

fn read_line() -> String {
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => std::process::exit(0), // stdin closed
        Ok(_) => line.trim().to_string(),
        Err(_) => String::new(),
    }
}

/// Prompts until the user types something non-empty.
pub fn get_non_empty_string(prompt: &str) -> String {
    loop {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        let value = read_line();
        if value.is_empty() {
            eprintln!("Invalid input. The field cannot be empty.");
            continue;
        }
        return value;
    }
}

/// Prompts until the user types a valid integer.
pub fn get_int(prompt: &str) -> i32 {
    loop {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        match read_line().parse::<i32>() {
            Ok(value) => return value,
            Err(_) => eprintln!("Invalid input. Please enter an integer."),
        }
    }
}
