//! Initial schema: units, members, expenses, expected expenses, balance
//! payments and contributions.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(SCHEMA_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const SCHEMA_SQL: &str = r"
CREATE TABLE units (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(200) NOT NULL,
    address TEXT,
    country VARCHAR(100),
    monthly_rent NUMERIC(19, 4) NOT NULL DEFAULT 0,
    contract_start DATE,
    contract_end DATE,
    payment_due_day INTEGER,
    created_by UUID,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_units_rent CHECK (monthly_rent >= 0),
    CONSTRAINT chk_units_due_day CHECK (payment_due_day IS NULL OR payment_due_day BETWEEN 1 AND 31),
    CONSTRAINT chk_units_contract CHECK (contract_end IS NULL OR contract_start IS NULL OR contract_end >= contract_start)
);

-- Contribution fields are nullable; readers fill defaults.
CREATE TABLE unit_members (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    unit_id UUID NOT NULL REFERENCES units(id) ON DELETE CASCADE,
    user_id UUID NOT NULL,
    display_name VARCHAR(200),
    role VARCHAR(20) NOT NULL DEFAULT 'co_tenant',
    contribution_type VARCHAR(10),
    share_percentage NUMERIC(7, 4),
    fixed_amount NUMERIC(19, 4),
    contribution_period VARCHAR(10),
    contribution_end_date DATE,
    joined_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_unit_members_user UNIQUE (unit_id, user_id)
);

CREATE INDEX idx_unit_members_user ON unit_members(user_id);

CREATE TABLE expenses (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    unit_id UUID NOT NULL REFERENCES units(id) ON DELETE CASCADE,
    category VARCHAR(20) NOT NULL,
    amount NUMERIC(19, 4) NOT NULL,
    paid_by UUID NOT NULL,
    date DATE NOT NULL,
    notes TEXT,
    payment_mode VARCHAR(20),
    receipt_url TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_expenses_amount CHECK (amount >= 0.01)
);

CREATE INDEX idx_expenses_unit_date ON expenses(unit_id, date DESC);

CREATE TABLE expected_expenses (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    unit_id UUID NOT NULL REFERENCES units(id) ON DELETE CASCADE,
    category VARCHAR(20) NOT NULL,
    amount NUMERIC(19, 4) NOT NULL DEFAULT 0,
    CONSTRAINT uq_expected_expenses_category UNIQUE (unit_id, category),
    CONSTRAINT chk_expected_expenses_amount CHECK (amount >= 0)
);

CREATE TABLE expected_expense_entries (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    unit_id UUID NOT NULL REFERENCES units(id) ON DELETE CASCADE,
    month DATE NOT NULL,
    category VARCHAR(20) NOT NULL,
    amount NUMERIC(19, 4) NOT NULL DEFAULT 0,
    CONSTRAINT uq_expected_entries_key UNIQUE (unit_id, month, category),
    CONSTRAINT chk_expected_entries_first_of_month CHECK (EXTRACT(DAY FROM month) = 1)
);

CREATE TABLE balance_payments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    unit_id UUID NOT NULL REFERENCES units(id) ON DELETE CASCADE,
    from_user UUID NOT NULL,
    to_user UUID,
    amount NUMERIC(19, 4) NOT NULL,
    for_month DATE NOT NULL,
    payment_mode VARCHAR(20),
    notes TEXT,
    paid_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_balance_payments_amount CHECK (amount > 0)
);

CREATE INDEX idx_balance_payments_unit_month ON balance_payments(unit_id, for_month);

CREATE TABLE contributions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    unit_id UUID NOT NULL REFERENCES units(id) ON DELETE CASCADE,
    amount NUMERIC(19, 4) NOT NULL,
    reason TEXT NOT NULL,
    requested_by UUID NOT NULL,
    status VARCHAR(20) NOT NULL DEFAULT 'pending',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_contributions_amount CHECK (amount > 0)
);

CREATE INDEX idx_contributions_unit ON contributions(unit_id, created_at DESC);

CREATE TABLE contribution_payments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    contribution_id UUID NOT NULL REFERENCES contributions(id) ON DELETE CASCADE,
    user_id UUID NOT NULL,
    amount NUMERIC(19, 4) NOT NULL,
    paid_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    payment_mode VARCHAR(20),
    receipt_url TEXT,
    CONSTRAINT uq_contribution_payments_user UNIQUE (contribution_id, user_id)
);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS contribution_payments CASCADE;
DROP TABLE IF EXISTS contributions CASCADE;
DROP TABLE IF EXISTS balance_payments CASCADE;
DROP TABLE IF EXISTS expected_expense_entries CASCADE;
DROP TABLE IF EXISTS expected_expenses CASCADE;
DROP TABLE IF EXISTS expenses CASCADE;
DROP TABLE IF EXISTS unit_members CASCADE;
DROP TABLE IF EXISTS units CASCADE;
";
