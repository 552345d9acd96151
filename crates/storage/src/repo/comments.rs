use crate::{models::SqlComment, Db};
use domain::{Comment, InsertReceipt, NewComment};

impl Db {
    // 单条参数化 INSERT，id 由库自增分配；返回插入回执而非整行
    pub async fn insert_comment(
        &self,
        date: &str,
        c: &NewComment,
    ) -> anyhow::Result<InsertReceipt> {
        let result = sqlx::query(
            r#"
            INSERT INTO comments (date, page, user, text, email)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(date)
        .bind(&c.page)
        .bind(&c.user)
        .bind(&c.text)
        .bind(&c.email)
        .execute(&self.pool)
        .await?;

        Ok(InsertReceipt {
            id: result.last_insert_rowid(),
            rows_affected: result.rows_affected(),
        })
    }

    // email 不进入查询列，读取侧永远拿不到它
    pub async fn list_comments(&self, page: &str) -> anyhow::Result<Vec<Comment>> {
        let rows = sqlx::query_as::<_, SqlComment>(
            r#"
            SELECT id, date, page, user, text
            FROM comments
            WHERE page = ?
            ORDER BY id ASC
            "#,
        )
        .bind(page)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
