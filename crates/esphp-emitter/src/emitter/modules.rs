use esphp_ast::{
    ExportDeclaration, ImportDeclaration, ImportSpecifier, ModuleDeclaration, Node, NodeKind,
};
use esphp_common::{capitalise_first_letter, diagnostic_codes};

use super::{Fragment, Printer};
use crate::context::EmitContext;

impl<'a> Printer<'a> {
    // =========================================================================
    // Modules
    // =========================================================================

    /// `module "utils" { ... }` opens `namespace Utils;`.
    pub(super) fn emit_module(&mut self, module: &ModuleDeclaration) -> Fragment {
        let ctx = EmitContext::child_of(NodeKind::ModuleDeclaration);
        let name = match module.id.name_text() {
            Some(name) => name.into_owned(),
            None => self.emit(&module.id, ctx.with_static(true)),
        };
        let body = self.emit(&module.body, ctx);
        Fragment::inline(format!(
            "namespace {};\n{body}",
            capitalise_first_letter(&name)
        ))
    }

    pub(super) fn emit_export(&mut self, export: &ExportDeclaration) -> Fragment {
        match &export.declaration {
            Some(declaration) => {
                self.emit_fragment(declaration, EmitContext::child_of(NodeKind::ExportDeclaration))
            }
            None => self.report(diagnostic_codes::EXPORT_WITHOUT_DECLARATION, &[]),
        }
    }

    /// One `use` statement per specifier, qualified by the capitalised
    /// source module name.
    pub(super) fn emit_import(&mut self, import: &ImportDeclaration) -> Fragment {
        let source = import.source.value.as_str().map_or_else(
            || {
                import
                    .source
                    .text()
                    .trim_matches(|c: char| c == '"' || c == '\'')
                    .to_string()
            },
            str::to_string,
        );
        let namespace = capitalise_first_letter(&source);
        let ctx = EmitContext::child_of(NodeKind::ImportDeclaration).with_import_source(&namespace);

        let mut text = String::new();
        for specifier in &import.specifiers {
            text.push_str(&self.emit(specifier, ctx));
        }
        Fragment::inline(text)
    }

    /// `use \Namespace\name` with an optional ` as alias`.
    pub(super) fn emit_import_specifier(
        &mut self,
        spec: &ImportSpecifier,
        ctx: EmitContext<'_>,
    ) -> Fragment {
        let imported = spec
            .id
            .name_text()
            .map(|name| name.into_owned())
            .unwrap_or_default();
        let Some(namespace) = ctx.import_source else {
            return self.report(
                diagnostic_codes::IMPORT_SPECIFIER_OUTSIDE_IMPORT,
                &[imported.as_str()],
            );
        };

        let mut text = format!("use \\{namespace}\\{imported}");
        if let Some(alias) = spec.name.as_deref().and_then(Node::identifier_name)
            && alias != imported
        {
            text.push_str(" as ");
            text.push_str(alias);
        }
        Fragment::statement(text)
    }
}
