use nom::{
    IResult, Parser,
    bytes::complete::take_till,
    character::complete::char,
    sequence::{delimited, preceded},
};

/// Manifest keys, double quoted as they appear in a line
pub const APPID_KEY: &str = "\"appid\"";
pub const NAME_KEY: &str = "\"name\"";

/// Parses a double quoted token, which may be empty (`""`)
pub fn parse_between_double_quotes(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|c| c == '"'), char('"')).parse(input)
}

pub fn parse_not_double_quote(input: &str) -> IResult<&str, &str> {
    take_till(|c| c == '"').parse(input)
}

/// For when both the key and value are needed (or key doesn't matter), and are both double quoted,
/// e.g. `\t\t"appid"\t\t"440"`
pub fn parse_double_quoted_key_value(line: &str) -> IResult<&str, (&str, &str)> {
    let (line, key) = preceded(parse_not_double_quote, parse_between_double_quotes).parse(line)?;
    let (line, value) =
        preceded(parse_not_double_quote, parse_between_double_quotes).parse(line)?;

    Ok((line, (key, value)))
}

/// Returns the value of a `"key" "value"` manifest line, or an empty string if the line does
/// not hold two complete quoted tokens. Callers must treat the empty string as "not found".
pub fn extract_value(line: &str) -> String {
    parse_double_quoted_key_value(line)
        .map(|(_, (_, value))| value.to_owned())
        .unwrap_or_default()
}
