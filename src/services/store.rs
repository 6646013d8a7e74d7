use std::collections::BTreeMap;

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::services::models::{MenuItem, Order, OrderStatus, Restaurant};
use crate::services::payloads::{NewMenuItem, NewOrder, NewRestaurant};
use crate::types::{StoreError, StoreResult};

const ORDER_NUMBER_PREFIX: &str = "QE";
const ORDER_NUMBER_SUFFIX_LEN: usize = 5;

// Authoritative in-memory holder of all entities. Identifiers are assigned
// from independent per-entity counters and are never reused; everything is
// lost on process shutdown.
pub struct MemStore {
    restaurants: BTreeMap<i64, Restaurant>,
    menu_items: BTreeMap<i64, MenuItem>,
    orders: BTreeMap<i64, Order>,
    next_restaurant_id: i64,
    next_menu_item_id: i64,
    next_order_id: i64,
}

impl MemStore {
    pub fn new() -> Self {
        let mut store = Self {
            restaurants: BTreeMap::new(),
            menu_items: BTreeMap::new(),
            orders: BTreeMap::new(),
            next_restaurant_id: 1,
            next_menu_item_id: 1,
            next_order_id: 1,
        };

        store.seed();
        store
    }

    pub fn list_restaurants(&self) -> Vec<Restaurant> {
        self.restaurants
            .values()
            .filter(|restaurant| restaurant.is_active)
            .cloned()
            .collect()
    }

    pub fn get_restaurant(&self, id: i64) -> StoreResult<Restaurant> {
        self.restaurants
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("Restaurant with id {id} not found")))
    }

    pub fn create_restaurant(&mut self, fields: NewRestaurant) -> Restaurant {
        let id = self.next_restaurant_id;
        self.next_restaurant_id += 1;

        let restaurant = Restaurant {
            id,
            name: fields.name,
            cuisine: fields.cuisine,
            rating: fields.rating,
            delivery_time: fields.delivery_time,
            price_for_two: fields.price_for_two,
            image: fields.image,
            address: fields.address,
            is_active: true,
        };

        self.restaurants.insert(id, restaurant.clone());
        restaurant
    }

    pub fn list_menu_by_restaurant(&self, restaurant_id: i64) -> Vec<MenuItem> {
        self.menu_items
            .values()
            .filter(|item| item.restaurant_id == restaurant_id && item.is_available)
            .cloned()
            .collect()
    }

    pub fn get_menu_item(&self, id: i64) -> StoreResult<MenuItem> {
        self.menu_items
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("Menu item with id {id} not found")))
    }

    pub fn create_menu_item(&mut self, fields: NewMenuItem) -> StoreResult<MenuItem> {
        if !self.restaurants.contains_key(&fields.restaurant_id) {
            return Err(StoreError::validation(format!(
                "Restaurant with id {} does not exist",
                fields.restaurant_id
            )));
        }

        let id = self.next_menu_item_id;
        self.next_menu_item_id += 1;

        let item = MenuItem {
            id,
            restaurant_id: fields.restaurant_id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            image: fields.image,
            is_veg: fields.is_veg,
            is_available: true,
        };

        self.menu_items.insert(id, item.clone());
        Ok(item)
    }

    pub fn create_order(&mut self, fields: NewOrder) -> StoreResult<Order> {
        if !self.restaurants.contains_key(&fields.restaurant_id) {
            return Err(StoreError::validation(format!(
                "Restaurant with id {} does not exist",
                fields.restaurant_id
            )));
        }
        if fields.items.is_empty() {
            return Err(StoreError::validation("Order must contain at least one item"));
        }
        if fields.items.iter().any(|item| item.quantity < 1) {
            return Err(StoreError::validation("Item quantities must be positive"));
        }
        if fields.customer_name.trim().is_empty()
            || fields.customer_phone.trim().is_empty()
            || fields.delivery_address.trim().is_empty()
        {
            return Err(StoreError::validation(
                "Customer name, phone and delivery address are required",
            ));
        }
        if fields.total != fields.subtotal + fields.delivery_fee {
            return Err(StoreError::validation(format!(
                "Total {} does not equal subtotal {} plus delivery fee {}",
                fields.total, fields.subtotal, fields.delivery_fee
            )));
        }

        let id = self.next_order_id;
        self.next_order_id += 1;

        let order = Order {
            id,
            order_number: self.generate_order_number(),
            restaurant_id: fields.restaurant_id,
            items: fields.items,
            subtotal: fields.subtotal,
            delivery_fee: fields.delivery_fee,
            total: fields.total,
            status: OrderStatus::Confirmed,
            delivery_address: fields.delivery_address,
            customer_name: fields.customer_name,
            customer_phone: fields.customer_phone,
            created_at: Utc::now(),
        };

        self.orders.insert(id, order.clone());
        tracing::info!(id, order_number = %order.order_number, total = order.total, "order placed");

        Ok(order)
    }

    pub fn get_order(&self, id: i64) -> StoreResult<Order> {
        self.orders
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("Order with id {id} not found")))
    }

    pub fn get_order_by_number(&self, order_number: &str) -> StoreResult<Order> {
        self.orders
            .values()
            .find(|order| order.order_number == order_number)
            .cloned()
            .ok_or_else(|| {
                StoreError::not_found(format!("Order with number {order_number} not found"))
            })
    }

    pub fn update_order_status(&mut self, id: i64, status: OrderStatus) -> StoreResult<Order> {
        let order = self
            .orders
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(format!("Order with id {id} not found")))?;

        if !order.status.can_advance_to(status) {
            return Err(StoreError::validation(format!(
                "Order status cannot move from '{}' to '{}'",
                order.status.as_str(),
                status.as_str()
            )));
        }

        tracing::info!(id, from = order.status.as_str(), to = status.as_str(), "order status updated");
        order.status = status;

        Ok(order.clone())
    }

    // Random suffix, re-rolled until the number is unused among stored orders.
    fn generate_order_number(&self) -> String {
        loop {
            let suffix: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(ORDER_NUMBER_SUFFIX_LEN)
                .map(|byte| char::from(byte).to_ascii_uppercase())
                .collect();
            let number = format!("{ORDER_NUMBER_PREFIX}{suffix}");

            if !self.orders.values().any(|order| order.order_number == number) {
                return number;
            }
        }
    }

    fn seed(&mut self) {
        let restaurants = [
            NewRestaurant {
                name: "Spice Garden".to_owned(),
                cuisine: "Indian, North Indian, Biryani".to_owned(),
                rating: "4.3".to_owned(),
                delivery_time: "25-30 mins".to_owned(),
                price_for_two: 300,
                image: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=240".to_owned(),
                address: "Downtown, San Francisco".to_owned(),
            },
            NewRestaurant {
                name: "Pizza Palace".to_owned(),
                cuisine: "Pizza, Italian, Fast Food".to_owned(),
                rating: "4.5".to_owned(),
                delivery_time: "20-25 mins".to_owned(),
                price_for_two: 400,
                image: "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=240".to_owned(),
                address: "Downtown, San Francisco".to_owned(),
            },
            NewRestaurant {
                name: "Burger Hub".to_owned(),
                cuisine: "Burgers, American, Fast Food".to_owned(),
                rating: "4.2".to_owned(),
                delivery_time: "15-20 mins".to_owned(),
                price_for_two: 350,
                image: "https://images.unsplash.com/photo-1571091718767-18b5b1457add?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=240".to_owned(),
                address: "Downtown, San Francisco".to_owned(),
            },
            NewRestaurant {
                name: "Sushi Zen".to_owned(),
                cuisine: "Japanese, Sushi, Asian".to_owned(),
                rating: "4.6".to_owned(),
                delivery_time: "30-35 mins".to_owned(),
                price_for_two: 800,
                image: "https://images.unsplash.com/photo-1579952363873-27d3bfad9c0d?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=240".to_owned(),
                address: "Downtown, San Francisco".to_owned(),
            },
        ];

        for fields in restaurants {
            self.create_restaurant(fields);
        }

        let menu_items = [
            NewMenuItem {
                restaurant_id: 1,
                name: "Paneer Tikka".to_owned(),
                description: "Grilled cottage cheese marinated in aromatic spices".to_owned(),
                price: 280,
                category: "Starters".to_owned(),
                image: "https://images.unsplash.com/photo-1599487488170-d11ec9c172f0?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=80".to_owned(),
                is_veg: true,
            },
            NewMenuItem {
                restaurant_id: 1,
                name: "Chicken Tikka".to_owned(),
                description: "Tender chicken marinated in yogurt and spices".to_owned(),
                price: 320,
                category: "Starters".to_owned(),
                image: "https://images.unsplash.com/photo-1603496987351-f84a3ba5ec85?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=80".to_owned(),
                is_veg: false,
            },
            NewMenuItem {
                restaurant_id: 1,
                name: "Butter Chicken".to_owned(),
                description: "Tender chicken in rich tomato and butter gravy".to_owned(),
                price: 380,
                category: "Main Course".to_owned(),
                image: "https://images.unsplash.com/photo-1603894584373-5ac82b2ae398?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=80".to_owned(),
                is_veg: false,
            },
            NewMenuItem {
                restaurant_id: 1,
                name: "Chicken Biryani".to_owned(),
                description: "Aromatic basmati rice with spiced chicken and saffron".to_owned(),
                price: 420,
                category: "Main Course".to_owned(),
                image: "https://images.unsplash.com/photo-1563379091339-03246963d96c?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=80".to_owned(),
                is_veg: false,
            },
            NewMenuItem {
                restaurant_id: 1,
                name: "Dal Tadka".to_owned(),
                description: "Yellow lentils tempered with cumin and spices".to_owned(),
                price: 220,
                category: "Main Course".to_owned(),
                image: "https://images.unsplash.com/photo-1546833999-b9f581a1996d?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=80".to_owned(),
                is_veg: true,
            },
            NewMenuItem {
                restaurant_id: 1,
                name: "Gulab Jamun".to_owned(),
                description: "Soft milk dumplings in sweet cardamom syrup".to_owned(),
                price: 120,
                category: "Desserts".to_owned(),
                image: "https://images.unsplash.com/photo-1571877227200-a0d98ea607e9?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=80".to_owned(),
                is_veg: true,
            },
        ];

        for fields in menu_items {
            self.create_menu_item(fields)
                .expect("seed menu items must reference seeded restaurants");
        }

        tracing::info!(
            restaurants = self.restaurants.len(),
            menu_items = self.menu_items.len(),
            "demo data seeded"
        );
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}
