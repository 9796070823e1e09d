//! Renders artifacts as C# source.

use crate::compose::{Artifact, EnumArtifact};
use crate::decl::{Declaration, Doc, EnumDecl, MemberDecl, Signature, Supertype};

const INDENT: &str = "    ";

const HEADER: &str = "\
// <auto-generated>
// This file was generated by rbxbind.
// Do not edit this file manually.
// </auto-generated>

#nullable enable
#pragma warning disable CS0108

";

/// C# printer. Holds what is needed to qualify cross-namespace supertypes.
pub struct CSharpPrinter {
    base_namespace: String,
    root_type: String,
}

impl CSharpPrinter {
    pub fn new(base_namespace: impl Into<String>, root_type: impl Into<String>) -> Self {
        Self {
            base_namespace: base_namespace.into(),
            root_type: root_type.into(),
        }
    }

    pub fn print_artifact(&self, artifact: &Artifact) -> String {
        let mut out = String::from(HEADER);

        let foreign = artifact.namespace != self.base_namespace;
        if foreign {
            out.push_str(&format!("using {};\n\n", self.base_namespace));
        }
        out.push_str(&format!("namespace {};\n", artifact.namespace));

        for declaration in &artifact.declarations {
            out.push('\n');
            self.print_declaration(&mut out, declaration, foreign);
        }

        out
    }

    pub fn print_enums(&self, artifact: &EnumArtifact) -> String {
        let mut out = String::from(HEADER);
        out.push_str(&format!("namespace {};\n", artifact.namespace));

        for decl in &artifact.enums {
            out.push('\n');
            print_enum(&mut out, decl);
        }

        out
    }

    fn print_declaration(&self, out: &mut String, decl: &Declaration, foreign: bool) {
        print_doc(out, "", &decl.doc);
        print_obsolete(out, "", decl.deprecation);

        let mut head = format!("public partial interface {}", decl.name);
        if let Some(supertype) = &decl.supertype {
            head.push_str(" : ");
            head.push_str(&self.supertype_name(supertype, foreign));
        }
        out.push_str(&head);
        out.push_str("\n{\n");

        for (i, member) in decl.members.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            print_member(out, member);
        }

        out.push_str("}\n");
    }

    /// Supertypes outside the base namespace are written fully qualified.
    fn supertype_name(&self, supertype: &Supertype, foreign: bool) -> String {
        match supertype {
            Supertype::Root if foreign => format!("global::{}.{}", self.base_namespace, self.root_type),
            Supertype::Root => self.root_type.clone(),
            Supertype::Class(name) => name.clone(),
            Supertype::BaseTier(name) => format!("global::{}.{}", self.base_namespace, name),
        }
    }
}

fn print_member(out: &mut String, member: &MemberDecl) {
    print_doc(out, INDENT, &member.doc);
    print_obsolete(out, INDENT, member.deprecation);

    let body = match &member.signature {
        Signature::Property { ty, get, set } | Signature::Callback { ty, get, set } => {
            format!("{} {} {}", ty, member.name, accessor_list(*get, *set))
        }
        Signature::Event { ty } => format!("{} {} {}", ty, member.name, accessor_list(true, false)),
        Signature::Method { returns, params } => {
            let params: Vec<_> = params.iter().map(|p| format!("{} {}", p.ty, p.name)).collect();
            format!("{} {}({});", returns, member.name, params.join(", "))
        }
    };

    out.push_str(INDENT);
    out.push_str(&body);
    out.push('\n');
}

fn accessor_list(get: bool, set: bool) -> &'static str {
    match (get, set) {
        (true, true) => "{ get; set; }",
        (true, false) => "{ get; }",
        (false, true) => "{ set; }",
        (false, false) => "{ }",
    }
}

fn print_enum(out: &mut String, decl: &EnumDecl) {
    print_doc(out, "", &decl.doc);
    print_obsolete(out, "", decl.deprecation);
    out.push_str(&format!("public enum {}\n{{\n", decl.name));

    for item in &decl.items {
        print_obsolete(out, INDENT, item.deprecation);
        out.push_str(&format!("{}{} = {},\n", INDENT, item.name, item.value));
    }

    out.push_str("}\n");
}

fn print_doc(out: &mut String, indent: &str, doc: &Doc) {
    out.push_str(&format!("{}/// <summary>{}</summary>\n", indent, escape_xml(&doc.summary)));
    for (name, text) in &doc.params {
        out.push_str(&format!(
            "{}/// <param name=\"{}\">{}</param>\n",
            indent,
            name,
            escape_xml(text)
        ));
    }
    if let Some(returns) = &doc.returns {
        out.push_str(&format!("{}/// <returns>{}</returns>\n", indent, escape_xml(returns)));
    }
    if let Some(remarks) = &doc.remarks {
        out.push_str(&format!("{}/// <remarks>{}</remarks>\n", indent, escape_xml(remarks)));
    }
}

fn print_obsolete(out: &mut String, indent: &str, message: Option<&str>) {
    if let Some(message) = message {
        out.push_str(&format!("{}[System.Obsolete(\"{}\")]\n", indent, message));
    }
}

/// Escape text for an XML doc comment.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
