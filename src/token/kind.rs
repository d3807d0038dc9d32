//! Token kinds recognized by the lexer.

/// The kind of token recognized by the lexer, per the closed set in
/// the token kind catalogue.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords
    /// `var`
    Var,
    /// `func`
    Function,
    /// `si`
    If,
    /// `sino`
    Else,
    /// `repetir`
    For,
    /// `retorna`
    Return,
    /// `entero` / `cadena` — reserved, not structurally enforced by the grammar.
    Datatype,
    /// Any identifier not found in the keyword table.
    Ident(String),

    // Literals
    /// An integer literal, stored as the original source slice.
    Number(String),
    /// A string literal; bytes between quotes copied verbatim (no escapes).
    StringLit(String),
    /// `true`
    True,
    /// `false`
    False,

    // Punctuation
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `{`
    LBrac,
    /// `}`
    RBrac,
    /// `(`
    LPar,
    /// `)`
    RPar,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisc,
    /// `/`
    Slash,
    /// `!`
    Bang,
    /// `=`
    Assign,
    /// `==`
    Equals,
    /// `!=`
    NotEqual,
    /// `<`
    Lt,
    /// `>`
    Gt,

    // Meta
    /// One or more consecutive `\n`, coalesced into a single token.
    Linebreak,
    /// End of input. Further calls to the lexer keep returning this.
    Eof,
    /// A byte the lexer does not recognize.
    Illegal(char),
}

impl TokenKind {
    /// Looks up a scanned identifier against the keyword table, falling
    /// back to `Ident` for anything unrecognized.
    pub fn keyword_or_ident(word: &str) -> TokenKind {
        match word {
            "func" => TokenKind::Function,
            "var" => TokenKind::Var,
            "si" => TokenKind::If,
            "sino" => TokenKind::Else,
            "repetir" => TokenKind::For,
            "retorna" => TokenKind::Return,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "entero" | "cadena" => TokenKind::Datatype,
            _ => TokenKind::Ident(word.to_string()),
        }
    }

    /// The literal source text this token kind would render as, for
    /// lexer-mode output and error messages.
    pub fn literal(&self) -> String {
        match self {
            TokenKind::Var => "var".to_string(),
            TokenKind::Function => "func".to_string(),
            TokenKind::If => "si".to_string(),
            TokenKind::Else => "sino".to_string(),
            TokenKind::For => "repetir".to_string(),
            TokenKind::Return => "retorna".to_string(),
            TokenKind::Datatype => "datatype".to_string(),
            TokenKind::Ident(s) => s.clone(),
            TokenKind::Number(s) => s.clone(),
            TokenKind::StringLit(s) => s.clone(),
            TokenKind::True => "true".to_string(),
            TokenKind::False => "false".to_string(),
            TokenKind::Colon => ":".to_string(),
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::LBrac => "{".to_string(),
            TokenKind::RBrac => "}".to_string(),
            TokenKind::LPar => "(".to_string(),
            TokenKind::RPar => ")".to_string(),
            TokenKind::Plus => "+".to_string(),
            TokenKind::Minus => "-".to_string(),
            TokenKind::Asterisc => "*".to_string(),
            TokenKind::Slash => "/".to_string(),
            TokenKind::Bang => "!".to_string(),
            TokenKind::Assign => "=".to_string(),
            TokenKind::Equals => "==".to_string(),
            TokenKind::NotEqual => "!=".to_string(),
            TokenKind::Lt => "<".to_string(),
            TokenKind::Gt => ">".to_string(),
            TokenKind::Linebreak => "\\n".to_string(),
            TokenKind::Eof => "".to_string(),
            TokenKind::Illegal(c) => c.to_string(),
        }
    }

    /// The name used in lexer-mode output and error messages (`[Type: KIND, ...]`).
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Var => "VAR",
            TokenKind::Function => "FUNCTION",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::Return => "RETURN",
            TokenKind::Datatype => "DATATYPE",
            TokenKind::Ident(_) => "IDENT",
            TokenKind::Number(_) => "NUMBER",
            TokenKind::StringLit(_) => "STRING",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::LBrac => "LBRAC",
            TokenKind::RBrac => "RBRAC",
            TokenKind::LPar => "LPAR",
            TokenKind::RPar => "RPAR",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisc => "ASTERISC",
            TokenKind::Slash => "SLASH",
            TokenKind::Bang => "BANG",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEqual => "NOTEQUAL",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Linebreak => "LINEBREAK",
            TokenKind::Eof => "EOF",
            TokenKind::Illegal(_) => "ILLEGAL",
        }
    }
}
