//! Raw CSS stylesheet model for snippet rewriting.
//!
//! Unlike a browser-style engine, snippet processing needs the stylesheet
//! text itself: selectors stay plain strings so class tokens can be renamed
//! in place, and declaration values stay raw so labels like
//! `border-radius: 10px` can be echoed verbatim.

use cssparser::{
    AtRuleParser, AtRuleType, BasicParseErrorKind, CowRcStr, ParseError, ParseErrorKind, Parser,
    ParserInput, QualifiedRuleParser, RuleListParser, SourceLocation, Token,
};

use crate::error::{Error, Result};

pub mod introspect;
pub mod rename;


pub use introspect::{Dimensions, declaration_values_per_rule, first_rule_dimensions};
pub use rename::{ClassNameMap, RenameCounter, rename_classes};

/// A single `property: value` declaration with the value kept as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// A qualified rule: one or more selectors and its declaration block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rule {
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

/// Parsed stylesheet with rules in document order.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// Parse a CSS stylesheet from a string.
    ///
    /// At-rules (`@import`, `@media`, ...) are skipped; any malformed rule
    /// fails the whole parse with the offending slice in the error.
    pub fn parse(css: &str) -> Result<Self> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let mut rules = Vec::new();

        let rule_parser = RawRuleParser { rules: &mut rules };

        for result in RuleListParser::new_for_stylesheet(&mut parser, rule_parser) {
            match result {
                Ok(()) => {}
                Err((error, slice)) => {
                    // At-rules surface as AtRuleInvalid; they are not malformed input.
                    if matches!(
                        error.kind,
                        ParseErrorKind::Basic(BasicParseErrorKind::AtRuleInvalid(_))
                    ) {
                        continue;
                    }
                    return Err(Error::CssParse(slice.trim().to_string()));
                }
            }
        }

        Ok(Stylesheet { rules })
    }

    /// Serialize back to CSS text with the same rule structure.
    pub fn to_css_string(&self) -> String {
        let mut out = String::new();
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            out.push_str(&rule.selectors.join(",\n"));
            out.push_str(" {\n");
            for declaration in &rule.declarations {
                out.push_str("  ");
                out.push_str(&declaration.property);
                out.push_str(": ");
                out.push_str(&declaration.value);
                out.push_str(";\n");
            }
            out.push('}');
        }
        out
    }
}

// =============================================================================
// CSS Parser Implementation
// =============================================================================

struct RawRuleParser<'a> {
    rules: &'a mut Vec<Rule>,
}

impl<'i> QualifiedRuleParser<'i> for RawRuleParser<'_> {
    type Prelude = Vec<String>;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        // Capture the selector list as raw text; renaming works on strings.
        let start = input.position();
        while input.next().is_ok() {}
        let selectors: Vec<String> = input
            .slice_from(start)
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if selectors.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok(selectors)
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _location: SourceLocation,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let declarations = parse_declarations(input)?;
        self.rules.push(Rule {
            selectors: prelude,
            declarations,
        });
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for RawRuleParser<'_> {
    type PreludeNoBlock = ();
    type PreludeBlock = ();
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<AtRuleType<Self::PreludeNoBlock, Self::PreludeBlock>, ParseError<'i, Self::Error>>
    {
        // Skip all @rules; consume tokens to find the end.
        while input.next().is_ok() {}
        Err(input.new_error(BasicParseErrorKind::AtRuleInvalid(name)))
    }
}

/// Parse a declaration block, keeping each value as the raw source slice.
fn parse_declarations<'i, 't>(
    input: &mut Parser<'i, 't>,
) -> Result<Vec<Declaration>, ParseError<'i, ()>> {
    let mut declarations = Vec::new();

    loop {
        input.skip_whitespace();
        if input.is_exhausted() {
            break;
        }

        let property = match input.next()? {
            Token::Ident(name) => name.to_string(),
            Token::Semicolon => continue,
            _ => return Err(input.new_custom_error(())),
        };

        input.expect_colon()?;
        input.skip_whitespace();

        // Consume value tokens until the semicolon, then take the raw slice.
        let start = input.position();
        let mut end = input.position();
        loop {
            end = input.position();
            match input.next() {
                Ok(Token::Semicolon) => break,
                Ok(_) => {}
                Err(_) => {
                    end = input.position();
                    break;
                }
            }
        }

        let value = input.slice(start..end).trim().to_string();
        if value.is_empty() {
            return Err(input.new_custom_error(()));
        }

        declarations.push(Declaration { property, value });
    }

    Ok(declarations)
}
