//! Dump value types to C# type expressions.
//!
//! Mapping never fails: anything without a specific mapping becomes the
//! opaque `object` type.

use serde::Serialize;

use rbxbind_core::schema::{Parameter, TypeCategory, ValueTypeRef};

/// Element type of the dump's "list of objects" data types.
const BASE_OBJECT: &str = "Instance";

/// A target type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TargetType {
    /// `object`
    Opaque,
    Void,
    Bool,
    Double,
    Float,
    Int,
    Long,
    String,
    Byte,
    /// Engine data type, enum, or class, by name.
    Named(String),
    Nullable(Box<TargetType>),
    Array(Box<TargetType>),
    Map(Box<TargetType>, Box<TargetType>),
    /// `ScriptSignal` or `ScriptSignal<T1, ..>`.
    Signal(Vec<TargetType>),
    /// `Action` or `Action<T1, ..>`.
    Action(Vec<TargetType>),
    /// `Func<T1, .., R>`.
    Func(Vec<TargetType>, Box<TargetType>),
}

impl TargetType {
    pub fn named(name: impl Into<String>) -> Self {
        TargetType::Named(name.into())
    }

    pub fn array(inner: TargetType) -> Self {
        TargetType::Array(Box::new(inner))
    }

    /// Wrap in `Nullable` unless already nullable.
    pub fn nullable(self) -> Self {
        match self {
            TargetType::Nullable(_) => self,
            other => TargetType::Nullable(Box::new(other)),
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, TargetType::Opaque)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TargetType::Void)
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, TargetType::Nullable(_))
    }

    /// Render as C# source.
    pub fn to_csharp(&self) -> String {
        match self {
            TargetType::Opaque => "object".to_string(),
            TargetType::Void => "void".to_string(),
            TargetType::Bool => "bool".to_string(),
            TargetType::Double => "double".to_string(),
            TargetType::Float => "float".to_string(),
            TargetType::Int => "int".to_string(),
            TargetType::Long => "long".to_string(),
            TargetType::String => "string".to_string(),
            TargetType::Byte => "byte".to_string(),
            TargetType::Named(name) => name.clone(),
            TargetType::Nullable(inner) => format!("{}?", inner.to_csharp()),
            TargetType::Array(inner) => format!("{}[]", inner.to_csharp()),
            TargetType::Map(key, value) => {
                format!("Dictionary<{}, {}>", key.to_csharp(), value.to_csharp())
            }
            TargetType::Signal(args) => generic("ScriptSignal", args.iter()),
            TargetType::Action(args) => generic("Action", args.iter()),
            TargetType::Func(args, ret) => {
                generic("Func", args.iter().chain(std::iter::once(ret.as_ref())))
            }
        }
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_csharp())
    }
}

fn generic<'a>(name: &str, args: impl Iterator<Item = &'a TargetType>) -> String {
    let args: Vec<_> = args.map(TargetType::to_csharp).collect();
    if args.is_empty() {
        name.to_string()
    } else {
        format!("{}<{}>", name, args.join(", "))
    }
}

/// Map a dump value type. An absent type is `void`.
pub fn map_type(value_type: Option<&ValueTypeRef>) -> TargetType {
    let Some(value_type) = value_type else {
        return TargetType::Void;
    };

    let (base_name, nullable) = value_type.split_nullable();

    // Function references and shared tables are opaque whatever their
    // category claims.
    if matches!(base_name, "Function" | "function" | "SharedTable") {
        return if nullable {
            TargetType::Opaque.nullable()
        } else {
            TargetType::Opaque
        };
    }

    let mapped = match value_type.category {
        TypeCategory::Primitive => map_primitive(base_name),
        TypeCategory::DataType => map_data_type(base_name),
        TypeCategory::Enum => map_enum(base_name),
        TypeCategory::Class => map_class(base_name),
        TypeCategory::Group => map_group(base_name),
        TypeCategory::Unknown => TargetType::Opaque,
    };

    if nullable && !mapped.is_opaque() && !mapped.is_void() {
        mapped.nullable()
    } else {
        mapped
    }
}

fn map_primitive(name: &str) -> TargetType {
    match name {
        "bool" => TargetType::Bool,
        "double" => TargetType::Double,
        "float" => TargetType::Float,
        "int" => TargetType::Int,
        "int64" => TargetType::Long,
        "string" => TargetType::String,
        "void" => TargetType::Void,
        _ => TargetType::Opaque,
    }
}

fn map_data_type(name: &str) -> TargetType {
    match name {
        "Vector2" | "Vector3" | "Vector3int16" | "CFrame" | "Color3" | "BrickColor"
        | "ColorSequence" | "ColorSequenceKeypoint" | "NumberSequence"
        | "NumberSequenceKeypoint" | "DateTime" | "TweenInfo" | "NumberRange" | "UDim"
        | "UDim2" | "Ray" | "Rect" | "Region3" | "Region3int16" | "PhysicalProperties"
        | "Axes" | "Faces" | "Font" | "Path2DControlPoint" | "RaycastParams"
        | "OverlapParams" | "RaycastResult" => TargetType::named(name),
        "Color3uint8" => TargetType::named("Color3"),
        "Content" | "ContentId" | "SharedString" | "BinaryString" | "ProtectedString"
        | "QDir" | "SystemAddress" | "UniqueId" => TargetType::String,
        "OptionalCoordinateFrame" => TargetType::named("CFrame").nullable(),
        "Objects" | "Instances" => TargetType::array(TargetType::named(BASE_OBJECT)),
        "buffer" => TargetType::array(TargetType::Byte),
        "RBXScriptSignal" | "ScriptSignal" => TargetType::Signal(Vec::new()),
        "CatalogSearchParams" | "QFont" | "OpenCloudModel" | "RotationCurveKey" | "AdReward"
        | "ClipEvaluator" | "FloatCurveKey" => TargetType::Opaque,
        _ => TargetType::named(name),
    }
}

/// Enums live at the top level of the target namespace.
fn map_enum(name: &str) -> TargetType {
    TargetType::named(name.strip_prefix("Enum.").unwrap_or(name))
}

fn map_class(name: &str) -> TargetType {
    match name {
        "RBXScriptSignal" => TargetType::Signal(Vec::new()),
        _ => TargetType::named(name),
    }
}

fn map_group(name: &str) -> TargetType {
    match name {
        "Array" | "Tuple" => TargetType::array(TargetType::Opaque),
        "Dictionary" | "Map" => TargetType::Map(
            Box::new(TargetType::String),
            Box::new(TargetType::Opaque),
        ),
        _ => TargetType::Opaque,
    }
}

/// Type of an event: a signal over its mapped parameter types.
pub fn signal_type(parameters: &[Parameter]) -> TargetType {
    TargetType::Signal(mapped_params(parameters))
}

/// Type of a callback: an action when it returns nothing, otherwise a
/// function returning the mapped return type.
pub fn callback_type(parameters: &[Parameter], return_type: Option<&ValueTypeRef>) -> TargetType {
    let ret = map_type(return_type);
    let args = mapped_params(parameters);
    if ret.is_void() {
        TargetType::Action(args)
    } else {
        TargetType::Func(args, Box::new(ret))
    }
}

fn mapped_params(parameters: &[Parameter]) -> Vec<TargetType> {
    parameters
        .iter()
        .map(|p| map_type(Some(&p.value_type)))
        .collect()
}
