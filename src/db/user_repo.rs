use crate::{
    common::error::AppError,
    models::user::{MemberProfile, User, UserRole},
};
use sqlx::{Executor, PgPool, Postgres};

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca um usuário pelo seu e-mail
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    // Cria um novo usuário. Devolve None quando o e-mail já existe: a corrida
    // entre a checagem do handler e o insert degrada para a mesma resposta
    // de duplicado, graças ao índice único.
    pub async fn create(
        &self,
        email: &str,
        display_name: Option<&str>,
        photo_url: Option<&str>,
        role: UserRole,
    ) -> Result<Option<User>, AppError> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, display_name, photo_url, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(display_name)
        .bind(photo_url)
        .bind(role)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                // Converte violação de chave única na resposta de duplicado
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return Ok(None);
                    }
                }
                Err(e.into())
            }
        }
    }

    // PATCH /users/update/{email}: atualização parcial.
    // updated_at é SEMPRE renovado, mesmo que nenhum campo novo venha no corpo.
    pub async fn update_profile(
        &self,
        email: &str,
        display_name: Option<&str>,
        photo_url: Option<&str>,
        role: Option<UserRole>,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET display_name = COALESCE($1, display_name),
                photo_url    = COALESCE($2, photo_url),
                role         = COALESCE($3, role),
                updated_at   = now()
            WHERE email = $4
            "#,
        )
        .bind(display_name)
        .bind(photo_url)
        .bind(role)
        .bind(email)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    // Passo da aceitação do acordo. Genérico sobre Executor para poder
    // compor dentro da transação do serviço.
    pub async fn set_role<'e, E>(
        &self,
        executor: E,
        email: &str,
        role: UserRole,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE users SET role = $1, updated_at = now() WHERE email = $2")
            .bind(role)
            .bind(email)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    // Perfil do membro: usuário + acordo mais recente (aceitações repetidas
    // criam linhas novas, então pegamos a última).
    pub async fn member_profile(&self, email: &str) -> Result<Option<MemberProfile>, AppError> {
        let profile = sqlx::query_as::<_, MemberProfile>(
            r#"
            SELECT u.display_name AS name,
                   u.email,
                   u.photo_url,
                   m.agreement_date,
                   m.floor_no,
                   m.block_name,
                   m.apartment_no,
                   m.rent
            FROM users u
            JOIN member_agreements m ON m.email = u.email
            WHERE u.email = $1
            ORDER BY m.created_at DESC
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    #[sqlx::test]
    async fn email_duplicado_nao_escreve_nada(pool: PgPool) {
        let repo = UserRepository::new(pool);

        let first = repo
            .create("maria@email.com", Some("Maria"), None, UserRole::User)
            .await
            .unwrap();
        assert!(first.is_some());

        // Segunda tentativa com o mesmo e-mail: nenhum insert acontece
        let duplicate = repo
            .create("maria@email.com", Some("Outra Maria"), None, UserRole::User)
            .await
            .unwrap();
        assert!(duplicate.is_none());

        let users = repo.list_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].display_name.as_deref(), Some("Maria"));
    }

    #[sqlx::test]
    async fn atualizacao_parcial_sempre_renova_o_timestamp(pool: PgPool) {
        let repo = UserRepository::new(pool);

        let created = repo
            .create("joao@email.com", Some("João"), None, UserRole::User)
            .await
            .unwrap()
            .unwrap();

        // Corpo vazio: nenhum campo novo, mas updated_at muda mesmo assim
        let rows = repo
            .update_profile("joao@email.com", None, None, None)
            .await
            .unwrap();
        assert_eq!(rows, 1);

        let updated = repo
            .find_by_email("joao@email.com")
            .await
            .unwrap()
            .unwrap();
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.display_name.as_deref(), Some("João"));
    }

    #[sqlx::test]
    async fn regravar_valores_identicos_ainda_conta_a_linha_casada(pool: PgPool) {
        let repo = UserRepository::new(pool);

        repo.create("ana@email.com", Some("Ana"), None, UserRole::User)
            .await
            .unwrap();

        // rows_affected() do Postgres conta linhas casadas pelo WHERE,
        // então os dois updates idênticos reportam 1 (ver UpdateResult)
        let first = repo
            .update_profile("ana@email.com", Some("Ana"), None, None)
            .await
            .unwrap();
        let second = repo
            .update_profile("ana@email.com", Some("Ana"), None, None)
            .await
            .unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 1);
    }
}
