//! Employee query service
//!
//! Directory-level semantics over the raw client operations. Every read
//! goes through [`EmployeeService::all`] — the upstream has no search or
//! count endpoints worth trusting, so filtering and ranking happen here,
//! on the freshly fetched collection.

use directory_client::{DirectoryClient, DirectoryError, DirectoryResult};
use shared::{DeleteEmployeeInput, Employee, EmployeeCreationInput};
use tracing::{debug, info};

/// Upstream collection path
const EMPLOYEE_API_PATH: &str = "/api/v1/employee";

/// Query service over the upstream employee directory
#[derive(Debug, Clone)]
pub struct EmployeeService {
    client: DirectoryClient,
}

impl EmployeeService {
    pub fn new(client: DirectoryClient) -> Self {
        Self { client }
    }

    /// Fetch the full collection. The sole source of truth for every read.
    pub async fn all(&self) -> DirectoryResult<Vec<Employee>> {
        let employees: Vec<Employee> = self.client.fetch(EMPLOYEE_API_PATH).await?;
        debug!(count = employees.len(), "Fetched employee collection");
        Ok(employees)
    }

    /// Employees whose name contains `term`, case-insensitive, keeping the
    /// collection's relative order. No trimming or normalization beyond
    /// case-folding.
    pub async fn search_by_name(&self, term: &str) -> DirectoryResult<Vec<Employee>> {
        let employees = self.all().await?;
        Ok(filter_by_name(employees, term))
    }

    /// Highest salary in the collection; `0` when it is empty.
    pub async fn highest_salary(&self) -> DirectoryResult<u32> {
        let employees = self.all().await?;
        Ok(highest_salary_of(&employees))
    }

    /// Names of the `count` highest-paid employees, salary descending.
    /// Ties keep the collection's relative order; fewer than `count`
    /// entries yields all of them.
    pub async fn top_earners(&self, count: usize) -> DirectoryResult<Vec<String>> {
        let employees = self.all().await?;
        Ok(top_names_by_salary(employees, count))
    }

    /// Fetch one employee by id. The upstream may answer 200 with a null
    /// payload; a non-success status (e.g. 404) propagates verbatim.
    pub async fn by_id(&self, id: &str) -> DirectoryResult<Option<Employee>> {
        self.client
            .fetch(&format!("{EMPLOYEE_API_PATH}/{id}"))
            .await
    }

    /// Create an employee from the caller's input, passed through verbatim.
    /// The upstream assigns the identifier.
    pub async fn create(&self, input: EmployeeCreationInput) -> DirectoryResult<Employee> {
        let employee: Employee = self.client.submit(EMPLOYEE_API_PATH, &input).await?;
        info!(id = %employee.id, "Employee created");
        Ok(employee)
    }

    /// Delete by id, returning the deleted employee's name.
    ///
    /// The upstream only deletes by name, so the id is resolved first. The
    /// record can be removed or renamed between the two calls; that window
    /// is accepted. The remove call is skipped entirely when the lookup
    /// comes back empty.
    pub async fn delete_by_id(&self, id: &str) -> DirectoryResult<String> {
        if let Some(employee) = self.by_id(id).await? {
            let payload = DeleteEmployeeInput::from_employee(&employee);
            if self.client.remove(EMPLOYEE_API_PATH, &payload).await? {
                info!(id, name = %employee.name, "Employee deleted");
                return Ok(employee.name);
            }
        }

        Err(DirectoryError::invalid(format!(
            "Employee not found with ID {id}"
        )))
    }
}

fn filter_by_name(employees: Vec<Employee>, term: &str) -> Vec<Employee> {
    let term = term.to_lowercase();
    employees
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&term))
        .collect()
}

fn highest_salary_of(employees: &[Employee]) -> u32 {
    employees.iter().map(|e| e.salary).max().unwrap_or(0)
}

fn top_names_by_salary(mut employees: Vec<Employee>, count: usize) -> Vec<String> {
    // sort_by is stable: equal salaries keep their fetch order
    employees.sort_by(|a, b| b.salary.cmp(&a.salary));
    employees.into_iter().take(count).map(|e| e.name).collect()
}
