use domain::Comment;
use sqlx::FromRow;

// 查询列与 SELECT 一一对应；email 故意不在其中
#[derive(FromRow)]
pub struct SqlComment {
    pub id: i64,
    pub date: String,
    pub page: String,
    pub user: String,
    pub text: String,
}

impl From<SqlComment> for Comment {
    fn from(sql: SqlComment) -> Self {
        Comment {
            id: sql.id,
            date: sql.date,
            page: sql.page,
            user: sql.user,
            text: sql.text,
        }
    }
}
