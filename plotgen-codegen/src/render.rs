//! Serialization of the structured model to Python source text.

use crate::model::{
    ClassDef, Constructor, DocBlock, FacadeMethod, FacadeModule, GeneratedModule, Import,
    ParameterSpec, PropertyKind, PropertySpec,
};
use crate::python::naming::shadow_field;
use plotgen_schema::literal::python_string;

/// First line of every generated file.
pub const HEADER: &str = "# @generated by plotgen. Do not edit.\n";

const METHOD_INDENT: &str = "    ";
const BODY_INDENT: &str = "        ";
const PARAM_TEXT_INDENT: &str = "            ";

/// Renders a datatypes module.
#[must_use]
pub fn render_module(module: &GeneratedModule) -> String {
    let mut output = String::new();
    output.push_str(HEADER);
    render_imports(&mut output, &module.imports);

    for class in &module.classes {
        render_class(&mut output, class);
    }

    output
}

/// Renders the facade module.
#[must_use]
pub fn render_facade(facade: &FacadeModule) -> String {
    let mut output = String::new();
    output.push_str(HEADER);
    render_imports(&mut output, &facade.imports);

    output.push_str(&format!(
        "\n\nclass {}({}):\n",
        facade.class_name, facade.base
    ));
    if facade.methods.is_empty() {
        output.push_str("    pass\n");
    }
    for method in &facade.methods {
        render_facade_method(&mut output, method, &facade.register_method);
    }

    output
}

fn render_imports(output: &mut String, imports: &[Import]) {
    for import in imports {
        match import {
            Import::Glob { module } => {
                output.push_str(&format!("from {module} import *\n"));
            }
            Import::Names { names, .. } if names.is_empty() => {}
            Import::Names { module, names } => {
                let rendered: Vec<String> = names
                    .iter()
                    .map(|n| match &n.alias {
                        Some(alias) => format!("{} as {}", n.name, alias),
                        None => n.name.clone(),
                    })
                    .collect();
                if rendered.len() == 1 && names[0].alias.is_none() {
                    output.push_str(&format!("from {} import {}\n", module, rendered[0]));
                } else {
                    output.push_str(&format!(
                        "from {} import ({})\n",
                        module,
                        rendered.join(", ")
                    ));
                }
            }
        }
    }
}

fn render_class(output: &mut String, class: &ClassDef) {
    output.push_str(&format!("\n\nclass {}({}):\n", class.name, class.base));

    for property in &class.properties {
        render_property(output, property);
    }

    render_constructor(output, &class.constructor);
}

fn render_property(output: &mut String, property: &PropertySpec) {
    let name = &property.name;
    let key = python_string(name);

    output.push_str(&format!("\n    # {name}\n"));
    output.push_str(&format!("    # {}\n", "-".repeat(name.len())));
    output.push_str("    @property\n");
    output.push_str(&format!(
        "    def {}(self) -> {}:\n",
        name, property.rendered_type
    ));
    output.push_str(&format!("{BODY_INDENT}\"\"\"\n"));
    for (i, paragraph) in property.doc.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        push_paragraph(output, BODY_INDENT, paragraph);
    }
    output.push_str(&format!("{BODY_INDENT}\"\"\"\n"));

    match property.kind {
        PropertyKind::NestedCompound => {
            let field = shadow_field(name);
            output.push_str(&format!("{BODY_INDENT}return self.{field}\n\n"));
            output.push_str(&format!("    @{name}.setter\n"));
            output.push_str(&format!("    def {name}(self, val):\n"));
            output.push_str(&format!(
                "{BODY_INDENT}self.{field} = self._set_compound_prop({key}, val, self.{field})\n"
            ));
        }
        PropertyKind::Simple | PropertyKind::ArrayOfCompound => {
            output.push_str(&format!("{BODY_INDENT}return self._data[{key}]\n\n"));
            output.push_str(&format!("    @{name}.setter\n"));
            output.push_str(&format!("    def {name}(self, val):\n"));
            output.push_str(&format!("{BODY_INDENT}self._set_prop({key}, val)\n"));
        }
    }
}

fn render_constructor(output: &mut String, ctor: &Constructor) {
    output.push('\n');
    render_signature(output, "__init__", &ctor.params);
    render_doc_block(output, &ctor.doc);

    output.push_str(&format!(
        "{BODY_INDENT}super().__init__({})\n\n",
        python_string(&ctor.plotly_name)
    ));

    output.push_str(&format!("{BODY_INDENT}# Initialize data dict\n"));
    output.push_str(&format!("{BODY_INDENT}# --------------------\n"));
    output.push_str(&format!(
        "{BODY_INDENT}self._data['type'] = {}\n\n",
        python_string(&ctor.type_discriminator)
    ));

    output.push_str(&format!("{BODY_INDENT}# Initialize validators\n"));
    output.push_str(&format!("{BODY_INDENT}# ---------------------\n"));
    for v in &ctor.validators {
        output.push_str(&format!(
            "{BODY_INDENT}self._validators[{}] = {}.{}()\n",
            python_string(&v.property),
            v.module_alias,
            v.class_name
        ));
    }

    // Shadow fields must exist before the first setter runs.
    if !ctor.prepare.is_empty() {
        output.push_str(&format!("\n{BODY_INDENT}# Init compound properties\n"));
        output.push_str(&format!("{BODY_INDENT}# ------------------------\n"));
        for property in &ctor.prepare {
            output.push_str(&format!(
                "{BODY_INDENT}self.{} = None\n",
                shadow_field(property)
            ));
        }
    }

    output.push_str(&format!(
        "\n{BODY_INDENT}# Populate data dict with properties\n"
    ));
    output.push_str(&format!(
        "{BODY_INDENT}# ----------------------------------\n"
    ));
    for a in &ctor.assign {
        output.push_str(&format!(
            "{BODY_INDENT}self.{} = {}\n",
            a.property, a.parameter
        ));
    }
}

fn render_facade_method(output: &mut String, method: &FacadeMethod, register_method: &str) {
    output.push('\n');
    render_signature(output, &method.name, &method.params);
    render_doc_block(output, &method.doc);

    if method.params.is_empty() {
        output.push_str(&format!(
            "{BODY_INDENT}new_trace = {}()\n",
            method.class_name
        ));
    } else {
        output.push_str(&format!(
            "{BODY_INDENT}new_trace = {}(\n",
            method.class_name
        ));
        for param in &method.params {
            output.push_str(&format!(
                "{PARAM_TEXT_INDENT}{}={},\n",
                param.name, param.name
            ));
        }
        output.push_str(&format!("{BODY_INDENT})\n"));
    }
    output.push_str(&format!("{BODY_INDENT}new_trace.parent = self\n"));
    output.push_str(&format!(
        "{BODY_INDENT}return self.{register_method}(new_trace)\n"
    ));
}

fn render_signature(output: &mut String, name: &str, params: &[ParameterSpec]) {
    output.push_str(&format!("{METHOD_INDENT}def {name}(\n"));
    output.push_str(&format!("{BODY_INDENT}self,\n"));
    for param in params {
        output.push_str(&format!(
            "{BODY_INDENT}{}={},\n",
            param.name, param.default
        ));
    }
    output.push_str(&format!("{METHOD_INDENT}):\n"));
}

fn render_doc_block(output: &mut String, doc: &DocBlock) {
    output.push_str(&format!("{BODY_INDENT}\"\"\"\n"));
    output.push_str(&format!(
        "{BODY_INDENT}Construct a new {} object\n\n",
        doc.title
    ));
    output.push_str(&format!("{BODY_INDENT}Parameters\n"));
    output.push_str(&format!("{BODY_INDENT}----------\n"));
    for param in &doc.params {
        output.push_str(&format!("{BODY_INDENT}{}\n", param.name));
        push_paragraph(output, PARAM_TEXT_INDENT, &param.lines);
    }
    output.push('\n');
    output.push_str(&format!("{BODY_INDENT}Returns\n"));
    output.push_str(&format!("{BODY_INDENT}-------\n"));
    output.push_str(&format!("{BODY_INDENT}{}\n", doc.returns));
    output.push_str(&format!("{BODY_INDENT}\"\"\"\n"));
}

/// Writes wrapped lines; the first line gets `indent`, the rest already
/// carry it. Empty lines are written bare.
fn push_paragraph(output: &mut String, indent: &str, lines: &[String]) {
    for (i, line) in lines.iter().enumerate() {
        let line = escape_docstring(line);
        if line.trim().is_empty() {
            output.push('\n');
        } else if i == 0 {
            output.push_str(&format!("{indent}{line}\n"));
        } else {
            output.push_str(&format!("{line}\n"));
        }
    }
}

fn escape_docstring(line: &str) -> String {
    line.replace('\\', "\\\\").replace("\"\"\"", "\\\"\\\"\\\"")
}
