//! ポート定義（アプリと外界の境界となる trait 群）

pub mod outbound;
