use regex_extractor::validate::read_positive;
use std::io;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let age = read_positive("Enter your age:", stdin.lock(), io::stdout())?;
    println!("Your age is {}.", age);
    Ok(())
}
