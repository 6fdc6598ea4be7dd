//! The surface grammar of the jersey language.

/// EBNF grammar accepted by [`parse`](crate::parse).
pub const GRAMMAR: &str = r##"Program   ::= "jersey" "{" { Decl } "}"
Decl      ::= ("team"|"player"|"sponsor"|"font") ":" STRING ";"
            | ("primary"|"secondary"|"tertiary"|"pattern_color") ":" COLOR ";"
            | "number" ":" INT ";"
            | ("player_size"|"number_size"|"team_size"|"sponsor_size") ":" INT ";"
            | "pattern" ":" IDENT ( "(" Arg {"," Arg} ")" )? ";"
Arg       ::= INT | COLOR | STRING
COLOR     ::= "#" HEX{3} | "#" HEX{6}
STRING    ::= '"' {escaped-or-plain-char} '"'
"##;
