//! Lexer tests module
//!
//! - basic: 基础测试（空白符、大小写、顺序）
//! - literals: 数字字面量测试
//! - symbols: 运算符、括号、函数与常量
//! - errors: 错误处理测试

mod symbols;
