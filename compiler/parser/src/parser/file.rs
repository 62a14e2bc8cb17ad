// Copyright (C) 2024-2026 the pkl-rs contributors.
// This file is part of the pkl-rs library.

// The pkl-rs library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The pkl-rs library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the pkl-rs library. If not, see <https://www.gnu.org/licenses/>.

use super::*;

use pkl_cst::*;
use pkl_errors::{ParseError, Result};
use pkl_span::{BytePos, Span};

/// The doc comment, annotations, and modifiers preceding a declaration.
#[derive(Default)]
pub(crate) struct MemberHeader {
    pub doc_comment: Option<DocComment>,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
}

impl MemberHeader {
    pub fn is_empty(&self) -> bool {
        self.doc_comment.is_none() && self.annotations.is_empty() && self.modifiers.is_empty()
    }

    /// The span where the header starts, if there is one.
    pub fn start_span(&self) -> Option<Span> {
        if let Some(doc) = &self.doc_comment {
            return Some(doc.span);
        }
        if let Some(annotation) = self.annotations.first() {
            return Some(annotation.span);
        }
        self.modifiers.first().map(|m| m.span)
    }
}

impl ParserContext<'_> {
    /// Returns a [`Module`] CST if all tokens can be consumed and represent
    /// a valid Pkl module.
    pub fn parse_module(&mut self) -> Result<Module> {
        let mut module = Module {
            decl: None,
            imports: Vec::new(),
            classes: Vec::new(),
            type_aliases: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            span: Span::dummy(),
            id: self.next_id(),
        };

        // The first header can belong to the module declaration or, when
        // there is none, to the first regular entry.
        let mut pending_header = Some(self.parse_member_header()?);

        if matches!(self.token.token, Token::Module | Token::Amends | Token::Extends) {
            let header = pending_header.take().expect("header is parsed exactly once");
            module.decl = Some(self.parse_module_decl(header)?);
        }

        // Imports sit between the module declaration and the first entry
        // and may not carry headers.
        while matches!(self.token.token, Token::Import | Token::ImportStar) {
            match &pending_header {
                Some(header) if !header.is_empty() => {
                    let span = header.start_span().unwrap_or(self.token.span);
                    return Err(ParseError::import_with_header(span + self.token.span).into());
                }
                _ => {}
            }
            pending_header = None;
            module.imports.push(self.parse_import()?);
        }

        // Entries.
        loop {
            let header = match pending_header.take() {
                Some(header) => header,
                None => self.parse_member_header()?,
            };

            match self.token.token {
                Token::Class => module.classes.push(self.parse_class(header)?),
                Token::TypeAlias => module.type_aliases.push(self.parse_type_alias(header)?),
                Token::Function => module.methods.push(self.parse_class_method(header)?),
                Token::Ident(_) => {
                    module.properties.push(self.parse_class_property_entry(header)?)
                }
                Token::Import | Token::ImportStar => {
                    return Err(ParseError::import_after_entry(self.token.span).into());
                }
                Token::Module => {
                    return Err(
                        ParseError::multiple_module_declarations(self.token.span).into()
                    );
                }
                Token::Amends | Token::Extends => {
                    return Err(ParseError::extends_and_amends(self.token.span).into());
                }
                Token::Eof => {
                    if !header.is_empty() {
                        // A dangling header has nothing to attach to.
                        return Err(
                            ParseError::unexpected_end_of_file(self.token.span).into()
                        );
                    }
                    break;
                }
                _ => return self.unexpected("a module member"),
            }
        }

        module.span = Span::new(BytePos(0), self.prev_token.span.hi);
        Ok(module)
    }

    /// Parses `doc-comment? annotation* modifier*`.
    pub(crate) fn parse_member_header(&mut self) -> Result<MemberHeader> {
        let doc_comment = self.parse_doc_comment();
        let mut annotations = Vec::new();
        while self.check(&Token::At) {
            annotations.push(self.parse_annotation()?);
        }
        let modifiers = self.parse_modifiers();
        Ok(MemberHeader { doc_comment, annotations, modifiers })
    }

    /// Parses `@Name` or `@Name { ... }`.
    fn parse_annotation(&mut self) -> Result<Annotation> {
        let start = self.expect(&Token::At)?;
        let name = self.parse_qualified_ident()?;
        let body = if self.check(&Token::LeftBrace) {
            Some(self.parse_object_body()?)
        } else {
            None
        };
        let end = body.as_ref().map(|b| b.span).unwrap_or(name.span);
        Ok(Annotation { name, body, span: start + end, id: self.next_id() })
    }

    /// Parses the module declaration: an optional `module` clause and an
    /// optional `extends`/`amends` clause, at least one of which is
    /// present.
    fn parse_module_decl(&mut self, header: MemberHeader) -> Result<ModuleDecl> {
        let start = header.start_span().unwrap_or(self.token.span);

        let name = if self.eat(&Token::Module) {
            Some(self.parse_qualified_ident()?)
        } else {
            None
        };

        let extends_or_amends = if matches!(self.token.token, Token::Amends | Token::Extends) {
            let kind = if self.check(&Token::Amends) {
                ExtendsOrAmendsKind::Amends
            } else {
                ExtendsOrAmendsKind::Extends
            };
            self.bump();
            let kw = self.prev_token.span;
            let url = self.parse_string_constant()?;
            let span = kw + url.span;
            Some(ExtendsOrAmendsDecl { url, kind, span, id: self.next_id() })
        } else {
            None
        };

        let end = extends_or_amends
            .as_ref()
            .map(|e| e.span)
            .or(name.as_ref().map(|n| n.span))
            .unwrap_or(self.prev_token.span);

        Ok(ModuleDecl {
            doc_comment: header.doc_comment,
            annotations: header.annotations,
            modifiers: header.modifiers,
            name,
            extends_or_amends,
            span: start + end,
            id: self.next_id(),
        })
    }

    /// Parses `import "uri" (as alias)?` / `import* "uri" (as alias)?`.
    fn parse_import(&mut self) -> Result<Import> {
        let is_glob = self.check(&Token::ImportStar);
        let start = self.expect_any(&[Token::Import, Token::ImportStar])?;
        let url = self.parse_string_constant()?;
        let alias = if self.eat(&Token::As) {
            Some(self.expect_ident()?)
        } else {
            None
        };
        let end = alias.as_ref().map(|a| a.span).unwrap_or(url.span);
        Ok(Import { url, is_glob, alias, span: start + end, id: self.next_id() })
    }

    /// Parses a class declaration; the cursor sits on `class`.
    fn parse_class(&mut self, header: MemberHeader) -> Result<Clazz> {
        let kw = self.expect(&Token::Class)?;
        let start = header.start_span().unwrap_or(kw);
        let name = self.expect_ident()?;
        let type_params = if self.check(&Token::Lt) {
            Some(self.parse_type_parameter_list()?)
        } else {
            None
        };
        let superclass = if self.eat(&Token::Extends) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let body = if self.check(&Token::LeftBrace) {
            Some(self.parse_class_body()?)
        } else {
            None
        };

        let end = body
            .as_ref()
            .map(|b| b.span)
            .or(superclass.as_ref().map(|s| s.span()))
            .or(type_params.as_ref().map(|t| t.span))
            .unwrap_or(name.span);

        Ok(Clazz {
            doc_comment: header.doc_comment,
            annotations: header.annotations,
            modifiers: header.modifiers,
            name,
            type_params,
            superclass,
            body,
            span: start + end,
            id: self.next_id(),
        })
    }

    /// Parses `{ property* method* }` of a class, in source order.
    fn parse_class_body(&mut self) -> Result<ClassBody> {
        let start = self.expect(&Token::LeftBrace)?;
        let mut properties = Vec::new();
        let mut methods = Vec::new();

        loop {
            let header = self.parse_member_header()?;
            match self.token.token {
                Token::Function => methods.push(self.parse_class_method(header)?),
                Token::Ident(_) => {
                    properties.push(self.parse_class_property_entry(header)?)
                }
                Token::RightBrace if header.is_empty() => break,
                _ => return self.unexpected("a property or method declaration"),
            }
        }

        let end = self.expect(&Token::RightBrace)?;
        Ok(ClassBody { properties, methods, span: start + end, id: self.next_id() })
    }

    /// Parses `typealias Name<...> = Type`.
    fn parse_type_alias(&mut self, header: MemberHeader) -> Result<TypeAlias> {
        let kw = self.expect(&Token::TypeAlias)?;
        let start = header.start_span().unwrap_or(kw);
        let name = self.expect_ident()?;
        let type_params = if self.check(&Token::Lt) {
            Some(self.parse_type_parameter_list()?)
        } else {
            None
        };
        self.expect(&Token::Assign)?;
        let body = self.parse_type()?;
        let span = start + body.span();

        Ok(TypeAlias {
            doc_comment: header.doc_comment,
            annotations: header.annotations,
            modifiers: header.modifiers,
            name,
            type_params,
            body,
            span,
            id: self.next_id(),
        })
    }

    /// Parses a method declaration; the body is optional so `abstract` and
    /// `external` methods parse as headers only.
    pub(crate) fn parse_class_method(&mut self, header: MemberHeader) -> Result<ClassMethod> {
        let kw = self.expect(&Token::Function)?;
        let start = header.start_span().unwrap_or(kw);
        let name = self.expect_ident()?;
        let type_params = if self.check(&Token::Lt) {
            Some(self.parse_type_parameter_list()?)
        } else {
            None
        };
        let parameters = self.parse_method_parameter_list()?;
        let return_type = if self.check(&Token::Colon) {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };
        let expr = if self.eat(&Token::Assign) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let end = expr
            .as_ref()
            .map(|e| e.span())
            .or(return_type.as_ref().map(|r| r.span))
            .unwrap_or(parameters.span);

        Ok(ClassMethod {
            doc_comment: header.doc_comment,
            annotations: header.annotations,
            modifiers: header.modifiers,
            name,
            type_params,
            parameters,
            return_type,
            expr,
            span: start + end,
            id: self.next_id(),
        })
    }

    /// Parses a property entry: `name: T`, `name (: T)? = expr`, or
    /// `name { ... } { ... }`.
    ///
    /// A name followed by none of these is not a property at all, and a
    /// type annotation combined with an object body is contradictory; both
    /// get dedicated errors.
    pub(crate) fn parse_class_property_entry(
        &mut self,
        header: MemberHeader,
    ) -> Result<ClassPropertyEntry> {
        let name = self.expect_ident()?;
        let start = header.start_span().unwrap_or(name.span);

        let type_annotation = if self.check(&Token::Colon) {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };

        if self.eat(&Token::Assign) {
            let expr = self.parse_expr()?;
            let span = start + expr.span();
            return Ok(ClassPropertyEntry::PropertyExpr(ClassPropertyExpr {
                doc_comment: header.doc_comment,
                annotations: header.annotations,
                modifiers: header.modifiers,
                name,
                type_annotation,
                expr,
                span,
                id: self.next_id(),
            }));
        }

        if self.check(&Token::LeftBrace) {
            if let Some(annotation) = &type_annotation {
                let span = annotation.span + self.token.span;
                return Err(ParseError::typed_property_with_body(&name.name, span).into());
            }
            let bodies = self.parse_body_chain()?;
            let span = start + bodies.last().expect("at least one body").span;
            return Ok(ClassPropertyEntry::PropertyBody(ClassPropertyBody {
                doc_comment: header.doc_comment,
                annotations: header.annotations,
                modifiers: header.modifiers,
                name,
                bodies,
                span,
                id: self.next_id(),
            }));
        }

        match type_annotation {
            Some(type_annotation) => {
                let span = start + type_annotation.span;
                Ok(ClassPropertyEntry::Property(ClassProperty {
                    doc_comment: header.doc_comment,
                    annotations: header.annotations,
                    modifiers: header.modifiers,
                    name,
                    type_annotation,
                    span,
                    id: self.next_id(),
                }))
            }
            None => Err(ParseError::incomplete_property(&name.name, start + name.span).into()),
        }
    }
}
