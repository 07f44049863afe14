//! Grammar of the manifest, before any value is interpreted.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_till1, take_until, take_while1},
    character::complete::{char, multispace1, space0},
    combinator::{map, opt, recognize, value},
    multi::many0,
    sequence::{delimited, preceded, separated_pair, terminated, tuple},
};

use crate::values::number_token;

/// A `property: value;` pair with the value still unparsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDeclaration<'a> {
    pub property: &'a str,
    pub value: &'a str,
}

/// One entry of the `photos` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawPhoto<'a> {
    /// Size not known yet.
    Auto,
    Sized { width: &'a str, height: &'a str },
}

/// Whitespace and `/* ... */` comments.
pub fn ws(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((multispace1, comment))))(input)
}

fn comment(input: &str) -> IResult<&str, &str> {
    recognize(delimited(tag("/*"), take_until("*/"), tag("*/")))(input)
}

pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// `name {`, returning the block name.
pub fn block_open(input: &str) -> IResult<&str, &str> {
    terminated(parse_ident, tuple((ws, char('{'))))(input)
}

/// Closing brace of a block, with any whitespace before it.
pub fn block_close(input: &str) -> IResult<&str, char> {
    preceded(ws, char('}'))(input)
}

/// `property: value;`. The semicolon may be omitted before `}`.
pub fn parse_declaration(input: &str) -> IResult<&str, RawDeclaration<'_>> {
    let (input, _) = ws(input)?;
    let (input, property) = parse_ident(input)?;
    let (input, _) = tuple((ws, char(':'), ws))(input)?;
    let (input, value) = take_till1(|c: char| c == ';' || c == '}')(input)?;
    let (input, _) = opt(char(';'))(input)?;

    Ok((
        input,
        RawDeclaration {
            property,
            value: value.trim(),
        },
    ))
}

/// `WxH;` or `auto;`. The semicolon may be omitted before `}`.
pub fn parse_photo(input: &str) -> IResult<&str, RawPhoto<'_>> {
    let (input, _) = ws(input)?;
    let (input, photo) = alt((
        value(RawPhoto::Auto, tag("auto")),
        map(
            separated_pair(number_token, tuple((space0, char('x'), space0)), number_token),
            |(width, height)| RawPhoto::Sized { width, height },
        ),
    ))(input)?;
    let (input, _) = opt(preceded(ws, char(';')))(input)?;

    Ok((input, photo))
}

/// Declarations up to and including the closing brace.
pub fn gallery_body(input: &str) -> IResult<&str, Vec<RawDeclaration<'_>>> {
    terminated(many0(parse_declaration), block_close)(input)
}

/// Photo entries up to and including the closing brace.
pub fn photos_body(input: &str) -> IResult<&str, Vec<RawPhoto<'_>>> {
    terminated(many0(parse_photo), block_close)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_skips_comments() {
        let (rest, _) = ws("  /* a */\n /* b */ gallery").unwrap();
        assert_eq!(rest, "gallery");
    }

    #[test]
    fn block_open_reads_name() {
        let (rest, name) = block_open("photos  {\n").unwrap();
        assert_eq!(name, "photos");
        assert_eq!(rest, "\n");
    }

    #[test]
    fn declaration_with_and_without_semicolon() {
        let (rest, decl) = parse_declaration(" width: 1000px; ").unwrap();
        assert_eq!(decl, RawDeclaration { property: "width", value: "1000px" });
        assert_eq!(rest, " ");

        let (rest, decl) = parse_declaration("padding : 2 }").unwrap();
        assert_eq!(decl, RawDeclaration { property: "padding", value: "2" });
        assert_eq!(rest, "}");
    }

    #[test]
    fn photo_entries() {
        assert_eq!(
            parse_photo("400x300;").unwrap().1,
            RawPhoto::Sized { width: "400", height: "300" }
        );
        assert_eq!(
            parse_photo(" 500 x 300 ;").unwrap().1,
            RawPhoto::Sized { width: "500", height: "300" }
        );
        assert_eq!(parse_photo("auto;").unwrap().1, RawPhoto::Auto);
        assert!(parse_photo("}").is_err());
    }

    #[test]
    fn gallery_body_consumes_closing_brace() {
        let (rest, decls) = gallery_body("\n width: 10;\n padding: 1;\n}\nphotos").unwrap();
        assert_eq!(decls.len(), 2);
        assert_eq!(rest, "\nphotos");
    }

    #[test]
    fn photos_body_rejects_stray_text() {
        assert!(photos_body(" 400x300; oops }").is_err());
    }
}
