// 工具模块
// 开发心理：与具体玩法无关的通用组件

pub mod random;

pub use random::{RandomGenerator, RandomManager, RandomStats};
