pub mod balance;
pub mod deposit;
pub mod history;
pub mod login;
pub mod register;
pub mod statement;
pub mod withdrawal;

#[cfg(test)]
pub(crate) fn test_console(
    input: &str,
) -> crate::io::console::Console<std::io::Cursor<Vec<u8>>, Vec<u8>> {
    crate::io::console::Console::new(std::io::Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[cfg(test)]
pub(crate) fn output_of(
    console: crate::io::console::Console<std::io::Cursor<Vec<u8>>, Vec<u8>>,
) -> String {
    String::from_utf8(console.into_output()).unwrap()
}
