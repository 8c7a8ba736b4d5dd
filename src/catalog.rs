//! Built-in walkthrough catalog
//!
//! The four demo cards: one per HTTP method, each with a React fetch
//! snippet, a Spring Boot controller snippet, a line-by-line explanation,
//! and a canned response payload.

use serde_json::json;

use crate::highlight::LanguageId;
use crate::model::{ApiDemo, HttpMethod, SourceSnippet};

/// All built-in demos, in page order: GET, POST, PUT, DELETE
pub fn builtin_demos() -> Vec<ApiDemo> {
    vec![get_users(), create_user(), update_user(), delete_user()]
}

fn frontend(code: &str) -> SourceSnippet {
    SourceSnippet::new(code, LanguageId::TypeScript).with_title("Frontend Implementation")
}

fn backend(code: &str) -> SourceSnippet {
    SourceSnippet::new(code, LanguageId::Java).with_title("Backend Implementation")
}

fn get_users() -> ApiDemo {
    ApiDemo {
        method: HttpMethod::Get,
        endpoint: "/api/users".into(),
        description: "Retrieve all users from the database".into(),
        frontend: frontend(
            r#"// React Frontend - Fetching users
const fetchUsers = async () => {
  try {
    const response = await fetch('/api/users');
    const users = await response.json();
    setUsers(users);
  } catch (error) {
    console.error('Error fetching users:', error);
  }
};

useEffect(() => {
  fetchUsers();
}, []);"#,
        ),
        backend: backend(
            r#"// Spring Boot Backend - GET endpoint
@RestController
@RequestMapping("/api")
public class UserController {

    @Autowired
    private UserService userService;

    @GetMapping("/users")
    public ResponseEntity<List<User>> getAllUsers() {
        List<User> users = userService.findAll();
        return ResponseEntity.ok(users);
    }
}"#,
        ),
        explanation: vec![
            "Import necessary React hooks (useEffect for side effects)".into(),
            "Create async function to handle the API call".into(),
            "Use fetch() to make HTTP GET request to our endpoint".into(),
            "Convert response to JSON format".into(),
            "Update component state with the received data".into(),
            "Handle any errors that might occur during the request".into(),
            "Use useEffect to call the function when component mounts".into(),
        ],
        mock_response: Some(json!([
            { "id": 1, "name": "John Doe", "email": "john@example.com" },
            { "id": 2, "name": "Jane Smith", "email": "jane@example.com" }
        ])),
    }
}

fn create_user() -> ApiDemo {
    ApiDemo {
        method: HttpMethod::Post,
        endpoint: "/api/users".into(),
        description: "Create a new user in the system".into(),
        frontend: frontend(
            r#"// React Frontend - Creating a new user
const createUser = async (userData) => {
  try {
    const response = await fetch('/api/users', {
      method: 'POST',
      headers: {
        'Content-Type': 'application/json',
      },
      body: JSON.stringify(userData)
    });

    const newUser = await response.json();
    setUsers([...users, newUser]);
  } catch (error) {
    console.error('Error creating user:', error);
  }
};"#,
        ),
        backend: backend(
            r#"// Spring Boot Backend - POST endpoint
@PostMapping("/users")
public ResponseEntity<User> createUser(@RequestBody User user) {
    try {
        User savedUser = userService.save(user);
        return ResponseEntity.status(HttpStatus.CREATED)
                           .body(savedUser);
    } catch (Exception e) {
        return ResponseEntity.badRequest().build();
    }
}"#,
        ),
        explanation: vec![
            "Define async function that accepts user data as parameter".into(),
            "Specify POST method in fetch options".into(),
            "Set Content-Type header to indicate JSON data".into(),
            "Convert user data to JSON string in request body".into(),
            "Extract the newly created user from response".into(),
            "Update local state by adding new user to existing array".into(),
            "Handle any errors during the creation process".into(),
        ],
        mock_response: Some(json!({
            "id": 3,
            "name": "New User",
            "email": "newuser@example.com",
            "createdAt": "2024-01-15T10:30:00Z"
        })),
    }
}

fn update_user() -> ApiDemo {
    ApiDemo {
        method: HttpMethod::Put,
        endpoint: "/api/users/{id}".into(),
        description: "Update existing user information".into(),
        frontend: frontend(
            r#"// React Frontend - Updating user data
const updateUser = async (userId, updatedData) => {
  try {
    const response = await fetch(`/api/users/${userId}`, {
      method: 'PUT',
      headers: {
        'Content-Type': 'application/json',
      },
      body: JSON.stringify(updatedData)
    });

    const updatedUser = await response.json();
    setUsers(users.map(user =>
      user.id === userId ? updatedUser : user
    ));
  } catch (error) {
    console.error('Error updating user:', error);
  }
};"#,
        ),
        backend: backend(
            r#"// Spring Boot Backend - PUT endpoint
@PutMapping("/users/{id}")
public ResponseEntity<User> updateUser(
    @PathVariable Long id,
    @RequestBody User userDetails) {

    Optional<User> userOptional = userService.findById(id);
    if (userOptional.isPresent()) {
        User user = userOptional.get();
        user.setName(userDetails.getName());
        user.setEmail(userDetails.getEmail());
        User updatedUser = userService.save(user);
        return ResponseEntity.ok(updatedUser);
    }
    return ResponseEntity.notFound().build();
}"#,
        ),
        explanation: vec![
            "Function takes userId and updated data as parameters".into(),
            "Use template literals to include userId in URL path".into(),
            "Specify PUT method for updating existing resources".into(),
            "Include updated data in JSON format in request body".into(),
            "Map through existing users array to find and update the specific user".into(),
            "Replace old user data with updated user data".into(),
            "Keep all other users unchanged in the array".into(),
        ],
        mock_response: Some(json!({
            "id": 1,
            "name": "John Updated",
            "email": "john.updated@example.com",
            "updatedAt": "2024-01-15T10:35:00Z"
        })),
    }
}

fn delete_user() -> ApiDemo {
    ApiDemo {
        method: HttpMethod::Delete,
        endpoint: "/api/users/{id}".into(),
        description: "Remove a user from the system".into(),
        frontend: frontend(
            r#"// React Frontend - Deleting a user
const deleteUser = async (userId) => {
  try {
    const response = await fetch(`/api/users/${userId}`, {
      method: 'DELETE'
    });

    if (response.ok) {
      setUsers(users.filter(user => user.id !== userId));
    }
  } catch (error) {
    console.error('Error deleting user:', error);
  }
};"#,
        ),
        backend: backend(
            r#"// Spring Boot Backend - DELETE endpoint
@DeleteMapping("/users/{id}")
public ResponseEntity<Void> deleteUser(@PathVariable Long id) {
    try {
        if (userService.existsById(id)) {
            userService.deleteById(id);
            return ResponseEntity.noContent().build();
        }
        return ResponseEntity.notFound().build();
    } catch (Exception e) {
        return ResponseEntity.internalServerError().build();
    }
}"#,
        ),
        explanation: vec![
            "Create async function that takes userId as parameter".into(),
            "Use template literals to include userId in URL path".into(),
            "Specify DELETE method for removing resources".into(),
            "No request body needed for DELETE operations".into(),
            "Check if response was successful (status 200-299)".into(),
            "Filter out the deleted user from local state".into(),
            "Update users array to exclude the deleted user".into(),
        ],
        mock_response: Some(json!({
            "message": "User deleted successfully",
            "deletedId": 1
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_methods() {
        let demos = builtin_demos();
        assert_eq!(demos.len(), 4);
        let methods: Vec<_> = demos.iter().map(|d| d.method).collect();
        assert_eq!(
            methods,
            vec![
                HttpMethod::Get,
                HttpMethod::Post,
                HttpMethod::Put,
                HttpMethod::Delete
            ]
        );
    }

    #[test]
    fn test_every_demo_has_mock_response() {
        for demo in builtin_demos() {
            assert!(demo.mock_response.is_some(), "{} has no mock", demo.endpoint);
            assert!(!demo.explanation.is_empty());
        }
    }

    #[test]
    fn test_snippet_languages() {
        for demo in builtin_demos() {
            assert_eq!(demo.frontend.language, LanguageId::TypeScript);
            assert_eq!(demo.backend.language, LanguageId::Java);
        }
    }
}
