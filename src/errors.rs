//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_assessment_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AssessmentError {
            $($variant(String),)*
        }

        impl AssessmentError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AssessmentError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AssessmentError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AssessmentError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AssessmentError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AssessmentError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_assessment_errors! {
    Validation("E001", "Validation Error"),
    NotFound("E002", "Resource Not Found"),
    Conflict("E003", "Conflict Error"),
    StateTransition("E004", "State Transition Error"),
    StorageOperation("E005", "Storage Operation Error"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
    StorageBackendNotFound("E008", "Storage Backend Not Found"),
}

impl AssessmentError {
    /// 判断是否应由调用方改为更新后重试（提交记录重复插入）
    pub fn is_retryable_as_update(&self) -> bool {
        matches!(self, AssessmentError::Conflict(_))
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AssessmentError {}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for AssessmentError {
    fn from(err: serde_json::Error) -> Self {
        AssessmentError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for AssessmentError {
    fn from(err: chrono::ParseError) -> Self {
        AssessmentError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AssessmentError>;
