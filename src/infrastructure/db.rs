use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Create colecao table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS colecao (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            titulo VARCHAR(100) NOT NULL,
            subtitulo VARCHAR(100),
            imagem VARCHAR(255) NOT NULL,
            autor VARCHAR(100) NOT NULL,
            created_at TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create citacao table. id_colecao is a plain column: quotations may
    // outlive their collection and show up with no collection in listings.
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS citacao (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            titulo VARCHAR(1000) NOT NULL,
            created_at TEXT NOT NULL,
            id_colecao INTEGER NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_citacao_id_colecao ON citacao(id_colecao)".to_owned(),
    ))
    .await?;

    tracing::debug!("Database migrations applied");
    Ok(())
}
