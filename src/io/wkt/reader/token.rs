//! Lexing of WKT text into tokens.

use std::iter::FusedIterator;

/// The closed keyword vocabulary. Keywords are matched case-sensitively.
static KEYWORDS: phf::Map<&'static str, Keyword> = phf::phf_map! {
    "POINT" => Keyword::Point,
    "MULTIPOINT" => Keyword::MultiPoint,
    "LINESTRING" => Keyword::LineString,
    "CIRCULARSTRING" => Keyword::CircularString,
    "MULTILINESTRING" => Keyword::MultiLineString,
    "POLYGON" => Keyword::Polygon,
    "MULTIPOLYGON" => Keyword::MultiPolygon,
    "Z" => Keyword::Z,
    "M" => Keyword::M,
    "ZM" => Keyword::ZM,
    "EMPTY" => Keyword::Empty,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Point,
    MultiPoint,
    LineString,
    CircularString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    Z,
    M,
    ZM,
    Empty,
}

/// The lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One of `(`, `)`, `,` or `-`.
    Punct(char),
    /// Digits with an optional fraction and exponent. Never carries a sign.
    Number,
    /// A run of letters, digits and underscores starting with a letter or underscore.
    Word,
    /// Any other single character.
    Other,
}

/// One atomic piece of WKT text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
    offset: usize,
}

impl<'a> Token<'a> {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the token in the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The keyword this token spells, if any.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Word => KEYWORDS.get(self.text).copied(),
            _ => None,
        }
    }

    pub fn is_punct(&self, punct: char) -> bool {
        self.kind == TokenKind::Punct(punct)
    }
}

/// A lazy iterator of [`Token`]s over WKT text.
///
/// Whitespace separates tokens and is otherwise ignored. The end of input is signalled by the
/// iterator returning `None`.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Length in bytes of the leading run of `rest` matching `pred`.
    fn run_len(rest: &str, pred: impl Fn(char) -> bool) -> usize {
        rest.find(|c: char| !pred(c)).unwrap_or(rest.len())
    }

    fn number_len(rest: &str) -> usize {
        let bytes = rest.as_bytes();
        let mut len = Self::run_len(rest, |c| c.is_ascii_digit());
        if bytes.get(len) == Some(&b'.') {
            len += 1;
            len += Self::run_len(&rest[len..], |c| c.is_ascii_digit());
        }
        if matches!(bytes.get(len), Some(b'e' | b'E')) {
            let mut exp = len + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let digits = Self::run_len(&rest[exp..], |c| c.is_ascii_digit());
            if digits > 0 {
                len = exp + digits;
            }
        }
        len
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.offset += Self::run_len(self.rest(), char::is_whitespace);

        let rest = self.rest();
        let first = rest.chars().next()?;
        let (kind, len) = match first {
            '(' | ')' | ',' | '-' => (TokenKind::Punct(first), 1),
            '0'..='9' | '.' => (TokenKind::Number, Self::number_len(rest)),
            c if c.is_alphabetic() || c == '_' => (
                TokenKind::Word,
                Self::run_len(rest, |c| c.is_alphanumeric() || c == '_'),
            ),
            c => (TokenKind::Other, c.len_utf8()),
        };

        let token = Token {
            kind,
            text: &rest[..len],
            offset: self.offset,
        };
        self.offset += len;
        Some(token)
    }
}

impl<'a> FusedIterator for Tokenizer<'a> {}

#[cfg(test)]
mod test {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        Tokenizer::new(input).map(|t| t.text()).collect()
    }

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        assert_eq!(
            texts("POINT Z(30.2 -20.7,1)"),
            ["POINT", "Z", "(", "30.2", "-", "20.7", ",", "1", ")"]
        );
        assert_eq!(texts("  \n\t "), Vec::<&str>::new());
    }

    #[test]
    fn sign_is_never_fused() {
        let tokens: Vec<_> = Tokenizer::new("-10.10").collect();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].is_punct('-'));
        assert_eq!(tokens[1].kind(), TokenKind::Number);
        assert_eq!(tokens[1].offset(), 1);
    }

    #[test]
    fn number_forms() {
        assert_eq!(
            texts("12 3.25 .5 7. 1e-5 2E+3"),
            ["12", "3.25", ".5", "7.", "1e-5", "2E+3"]
        );
        // An exponent marker without digits is not part of the number.
        assert_eq!(texts("4e"), ["4", "e"]);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        let tokens: Vec<_> = Tokenizer::new("MULTIPOLYGON ZM EMPTY POINt").collect();
        assert_eq!(tokens[0].keyword(), Some(Keyword::MultiPolygon));
        assert_eq!(tokens[1].keyword(), Some(Keyword::ZM));
        assert_eq!(tokens[2].keyword(), Some(Keyword::Empty));
        assert_eq!(tokens[3].keyword(), None);
        assert_eq!(tokens[3].kind(), TokenKind::Word);
    }

    #[test]
    fn other_characters_are_single_tokens() {
        let tokens: Vec<_> = Tokenizer::new("+é;").collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind(), TokenKind::Other);
        assert_eq!(tokens[0].text(), "+");
        // Alphabetic non-ASCII characters still form words.
        assert_eq!(tokens[1].kind(), TokenKind::Word);
        assert_eq!(tokens[1].text(), "é");
        assert_eq!(tokens[2].offset(), 3);
    }

    #[test]
    fn offsets() {
        let offsets: Vec<_> = Tokenizer::new("POINT (1 2)").map(|t| t.offset()).collect();
        assert_eq!(offsets, [0, 6, 7, 9, 10]);
    }

    #[test]
    fn offset_tracks_consumed_input() {
        let mut tokenizer = Tokenizer::new("POINT  (1 2)  ");
        assert_eq!(tokenizer.offset(), 0);
        tokenizer.next();
        assert_eq!(tokenizer.offset(), 5);
        // Leading whitespace is skipped before the next token is cut.
        assert_eq!(tokenizer.next().map(|t| t.offset()), Some(7));
        assert_eq!(tokenizer.offset(), 8);
        assert_eq!(tokenizer.by_ref().count(), 3);
        assert_eq!(tokenizer.offset(), 14);
    }
}
